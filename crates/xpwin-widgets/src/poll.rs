//! Polling cadence for the dashboard's data fetches
//!
//! Two externally supplied fetch functions run on fixed intervals: a
//! fast one for live stats and a slow one for heavier queries. The
//! schedule only decides *when* each fires; it never inspects results
//! and has no interface back into the window core.

/// Fast polling interval
pub const FAST_INTERVAL_MS: f64 = 15_000.0;
/// Slow polling interval
pub const SLOW_INTERVAL_MS: f64 = 60_000.0;

/// Which fetches are due at a given tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollDue {
    pub fast: bool,
    pub slow: bool,
}

/// Tracks when each cadence last fired
#[derive(Clone, Copy, Debug, Default)]
pub struct PollSchedule {
    last_fast_ms: Option<f64>,
    last_slow_ms: Option<f64>,
}

impl PollSchedule {
    /// Create a schedule; the first tick fires both fetches
    pub fn new() -> Self {
        Self::default()
    }

    /// Report which fetches are due now and mark them fired
    pub fn due(&mut self, now_ms: f64) -> PollDue {
        let fast = self
            .last_fast_ms
            .map_or(true, |t| now_ms - t >= FAST_INTERVAL_MS);
        if fast {
            self.last_fast_ms = Some(now_ms);
        }

        let slow = self
            .last_slow_ms
            .map_or(true, |t| now_ms - t >= SLOW_INTERVAL_MS);
        if slow {
            self.last_slow_ms = Some(now_ms);
        }

        PollDue { fast, slow }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_fires_both() {
        let mut schedule = PollSchedule::new();
        assert_eq!(schedule.due(0.0), PollDue { fast: true, slow: true });
    }

    #[test]
    fn test_within_interval_fires_nothing() {
        let mut schedule = PollSchedule::new();
        schedule.due(0.0);
        assert_eq!(schedule.due(14_999.0), PollDue { fast: false, slow: false });
    }

    #[test]
    fn test_cadences_fire_independently() {
        let mut schedule = PollSchedule::new();
        schedule.due(0.0);

        assert_eq!(schedule.due(15_000.0), PollDue { fast: true, slow: false });
        assert_eq!(schedule.due(30_000.0), PollDue { fast: true, slow: false });
        assert_eq!(schedule.due(60_000.0), PollDue { fast: true, slow: true });
    }

    #[test]
    fn test_late_tick_fires_once() {
        let mut schedule = PollSchedule::new();
        schedule.due(0.0);

        // A long gap (tab in background) still yields a single firing
        assert_eq!(schedule.due(500_000.0), PollDue { fast: true, slow: true });
        assert_eq!(schedule.due(500_001.0), PollDue { fast: false, slow: false });
    }
}
