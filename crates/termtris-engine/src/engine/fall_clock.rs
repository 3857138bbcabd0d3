use std::time::{Duration, Instant};

/// Automatic fall interval at `level`, in milliseconds.
///
/// `1000 - (level - 1) * 100`. The value is not clamped: from level 11 on it
/// is zero or negative, which makes a fall due on every tick.
///
/// # Example
///
/// ```
/// use termtris_engine::fall_interval_millis;
///
/// assert_eq!(fall_interval_millis(1), 1000);
/// assert_eq!(fall_interval_millis(10), 100);
/// assert_eq!(fall_interval_millis(12), -100);
/// ```
#[must_use]
pub fn fall_interval_millis(level: u64) -> i64 {
    let level = i64::try_from(level).unwrap_or(i64::MAX);
    1000_i64.saturating_sub(level.saturating_sub(1).saturating_mul(100))
}

/// Tick policy for the automatic fall.
///
/// Decisions depend only on the timestamps passed in, never on how often
/// [`FallClock::poll`] is called, so frame pacing cannot change game outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FallClock {
    last_fall: Option<Instant>,
}

impl FallClock {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_fall: None }
    }

    /// Returns `true` if a fall is due at `now` for the given level.
    ///
    /// The first check after creation is always due.
    #[must_use]
    pub fn is_due(&self, now: Instant, level: u64) -> bool {
        let Some(last_fall) = self.last_fall else {
            return true;
        };
        let Ok(interval) = u64::try_from(fall_interval_millis(level)) else {
            return true;
        };
        now.saturating_duration_since(last_fall) >= Duration::from_millis(interval)
    }

    /// Checks whether a fall is due and, if so, restarts the interval at `now`.
    pub fn poll(&mut self, now: Instant, level: u64) -> bool {
        let due = self.is_due(now, level);
        if due {
            self.last_fall = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fall_interval_decreases_per_level() {
        assert_eq!(fall_interval_millis(1), 1000);
        assert_eq!(fall_interval_millis(2), 900);
        assert_eq!(fall_interval_millis(10), 100);
        assert_eq!(fall_interval_millis(11), 0);
        assert_eq!(fall_interval_millis(20), -900);
    }

    #[test]
    fn test_first_poll_is_due() {
        let mut clock = FallClock::new();
        assert!(clock.poll(Instant::now(), 1));
    }

    #[test]
    fn test_poll_waits_for_interval() {
        let start = Instant::now();
        let mut clock = FallClock::new();
        assert!(clock.poll(start, 1));

        assert!(!clock.poll(start + Duration::from_millis(999), 1));
        assert!(clock.poll(start + Duration::from_millis(1000), 1));
        assert!(!clock.poll(start + Duration::from_millis(1500), 1));
        assert!(clock.poll(start + Duration::from_millis(2000), 1));
    }

    #[test]
    fn test_interval_follows_level() {
        let start = Instant::now();
        let mut clock = FallClock::new();
        assert!(clock.poll(start, 5));
        assert!(!clock.poll(start + Duration::from_millis(599), 5));
        assert!(clock.poll(start + Duration::from_millis(600), 5));
    }

    #[test]
    fn test_non_positive_interval_is_always_due() {
        let start = Instant::now();
        let mut clock = FallClock::new();
        assert!(clock.poll(start, 15));
        assert!(clock.poll(start, 15));
        assert!(clock.poll(start, 11));
    }
}
