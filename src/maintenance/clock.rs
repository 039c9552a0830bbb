//! Wall-clock source for the elapsed time computation

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[cfg(test)]
use mockall::automock;

/// Trait for reading the current time - allows fixed clocks and mocks in tests
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// A clock stopped at midnight UTC of `date`.
    pub fn at_start_of(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_starts_at_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        let clock = FixedClock::at_start_of(date);
        assert_eq!(clock.now().to_rfc3339(), "2025-04-05T00:00:00+00:00");
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
