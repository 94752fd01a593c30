//! Pomodoro countdown state machine.
//!
//! The timer counts whole seconds. It owns a single [`Ticker`]; the event
//! loop asks it whether a tick is due and then calls [`Timer::tick`].
//!
//! ```text
//! Pomodoro ──expire──> ShortBreak ──expire──> Pomodoro
//!     └──every Nth───> LongBreak  ──expire──┘
//! ```
//!
//! Expiry switches mode and immediately resumes, so sessions chain without
//! a manual restart.

use super::durations::DurationTable;
use super::enums::TimerMode;
use crate::ticker::Ticker;
use std::time::Instant;

/// Reported by `tick` when a running session reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// Mode of the session that just finished
    pub finished: TimerMode,
    /// Mode the timer moved into (already running)
    pub next: TimerMode,
    /// Completed Pomodoros counted toward the long break
    pub cycle_count: u32,
}

#[derive(Debug, Clone)]
pub struct Timer {
    durations: DurationTable,
    mode: TimerMode,
    time_left_secs: u32,
    is_running: bool,
    cycle_count: u32,
    ticker: Ticker,
}

impl Timer {
    pub fn new(durations: DurationTable) -> Self {
        Self {
            durations,
            mode: TimerMode::Pomodoro,
            time_left_secs: durations.seconds(TimerMode::Pomodoro),
            is_running: false,
            cycle_count: 0,
            ticker: Ticker::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub fn durations(&self) -> &DurationTable {
        &self.durations
    }

    /// Full length of the current mode in seconds
    pub fn total_secs(&self) -> u32 {
        self.durations.seconds(self.mode)
    }

    /// 0.0 .. 1.0 fraction of the current session already elapsed
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (total - self.time_left_secs.min(total)) as f64 / total as f64
    }

    /// Next instant the event loop must wake for a tick
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.next_deadline()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start/pause toggle
    pub fn toggle(&mut self) {
        self.set_running(!self.is_running);
    }

    pub fn reset(&mut self) {
        self.set_running(false);
        self.time_left_secs = self.total_secs();
    }

    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.set_running(false);
        self.mode = mode;
        self.time_left_secs = self.total_secs();
    }

    /// Whether a tick has come due by `now`. Ticks are only scheduled while running.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        self.ticker.due(now)
    }

    /// Advance one second. Returns the expiry when this tick ends the session.
    pub fn tick(&mut self) -> Option<Expiry> {
        if !self.is_running {
            return None;
        }
        if self.time_left_secs > 0 {
            self.time_left_secs -= 1;
            if self.time_left_secs > 0 {
                return None;
            }
        }
        Some(self.expire())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn set_running(&mut self, running: bool) {
        self.is_running = running;
        if running {
            self.ticker.schedule();
        } else {
            self.ticker.cancel();
        }
    }

    fn expire(&mut self) -> Expiry {
        let finished = self.mode;
        let next = if finished == TimerMode::Pomodoro {
            self.cycle_count += 1;
            if self.cycle_count % self.durations.sessions_until_long_break == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            }
        } else {
            TimerMode::Pomodoro
        };

        self.switch_mode(next);
        self.set_running(true);

        Expiry {
            finished,
            next,
            cycle_count: self.cycle_count,
        }
    }
}

/// Format seconds as MM:SS
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
