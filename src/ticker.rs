use std::time::{Duration, Instant};

/// Countdown period in milliseconds
pub const TICK_PERIOD_MS: u64 = 1000;

/// Redraw interval in milliseconds when no tick is pending
pub const DEFAULT_REFRESH_MS: u64 = 250;

/// Get the redraw interval
pub fn refresh_duration() -> Duration {
    Duration::from_millis(DEFAULT_REFRESH_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickSource {
    Idle,
    /// Scheduled, first deadline is set on the next poll
    Pending,
    Scheduled(Instant),
}

/// A repeating tick with cancel-on-demand.
///
/// Holds at most one tick source. The event loop calls `due` with the
/// current instant; the first deadline is placed one period after the
/// first poll that follows `schedule`.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    source: TickSource,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_PERIOD_MS))
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            source: TickSource::Idle,
        }
    }

    /// Start ticking, replacing any existing schedule
    pub fn schedule(&mut self) {
        self.source = TickSource::Pending;
    }

    pub fn cancel(&mut self) {
        self.source = TickSource::Idle;
    }

    /// Returns true once for every period that has elapsed by `now`
    pub fn due(&mut self, now: Instant) -> bool {
        match self.source {
            TickSource::Idle => false,
            TickSource::Pending => {
                self.source = TickSource::Scheduled(now + self.period);
                false
            }
            TickSource::Scheduled(deadline) if now >= deadline => {
                self.source = TickSource::Scheduled(deadline + self.period);
                true
            }
            TickSource::Scheduled(_) => false,
        }
    }

    /// When the event loop should wake up next for this ticker
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.source {
            TickSource::Scheduled(deadline) => Some(deadline),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_duration() {
        assert_eq!(refresh_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_idle_ticker_never_fires() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.due(now + Duration::from_secs(10)));
        assert!(ticker.next_deadline().is_none());
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let start = Instant::now();
        ticker.schedule();

        assert!(!ticker.due(start));
        assert_eq!(ticker.next_deadline(), Some(start + Duration::from_secs(1)));
        assert!(!ticker.due(start + Duration::from_millis(999)));
        assert!(ticker.due(start + Duration::from_secs(1)));
        assert!(!ticker.due(start + Duration::from_millis(1500)));
        assert!(ticker.due(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_catches_up_after_a_stall() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let start = Instant::now();
        ticker.schedule();
        ticker.due(start);

        let late = start + Duration::from_millis(3500);
        let mut fired = 0;
        while ticker.due(late) {
            fired += 1;
        }
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_cancel_stops_pending_ticks() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let start = Instant::now();
        ticker.schedule();
        ticker.due(start);
        ticker.cancel();

        assert!(ticker.next_deadline().is_none());
        assert!(!ticker.due(start + Duration::from_secs(5)));
    }
}
