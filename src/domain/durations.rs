use super::enums::TimerMode;
use serde::Deserialize;

/// Default Pomodoro length in minutes
pub const DEFAULT_POMODORO_MINUTES: u32 = 25;
/// Default short break length in minutes
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break length in minutes
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
/// Completed Pomodoros before a long break
pub const DEFAULT_SESSIONS_UNTIL_LONG_BREAK: u32 = 4;

/// Mode -> duration mapping, in whole minutes as written in config.toml
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DurationTable {
    pub pomodoro_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub sessions_until_long_break: u32,
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            pomodoro_minutes: DEFAULT_POMODORO_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            sessions_until_long_break: DEFAULT_SESSIONS_UNTIL_LONG_BREAK,
        }
    }
}

impl DurationTable {
    /// Duration of a mode in seconds
    pub fn seconds(&self, mode: TimerMode) -> u32 {
        let minutes = match mode {
            TimerMode::Pomodoro => self.pomodoro_minutes,
            TimerMode::ShortBreak => self.short_break_minutes,
            TimerMode::LongBreak => self.long_break_minutes,
        };
        minutes.saturating_mul(60)
    }

    /// Find the first field that would break the timer (zero length or zero cycle)
    pub fn invalid_field(&self) -> Option<&'static str> {
        if self.pomodoro_minutes == 0 {
            Some("pomodoro_minutes")
        } else if self.short_break_minutes == 0 {
            Some("short_break_minutes")
        } else if self.long_break_minutes == 0 {
            Some("long_break_minutes")
        } else if self.sessions_until_long_break == 0 {
            Some("sessions_until_long_break")
        } else {
            None
        }
    }
}
