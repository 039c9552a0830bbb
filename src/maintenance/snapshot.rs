//! Refresh cycle
//!
//! A [`DashboardSnapshot`] is everything the dashboard shows, produced in one
//! piece by [`SnapshotGenerator::refresh`]. Replacing the snapshot is the only
//! way dashboard data changes.

use super::clock::Clock;
use super::records::{MaintenanceRecord, generate_records};
use crate::consts::cli_consts::data::{DAYS_PER_MONTH, MAX_TOTAL_COST, MIN_TOTAL_COST};
use chrono::{DateTime, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt::{Display, Formatter};

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Time since an event, in fixed 30-day months plus remaining days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElapsedTime {
    pub months: u64,
    pub days: u64,
}

impl ElapsedTime {
    pub fn from_days(total_days: u64) -> Self {
        Self {
            months: total_days / DAYS_PER_MONTH,
            days: total_days % DAYS_PER_MONTH,
        }
    }
}

impl Display for ElapsedTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} months, {} days", self.months, self.days)
    }
}

/// One complete set of dashboard data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub records: Vec<MaintenanceRecord>,
    pub total_cost: u32,
    pub elapsed_since_last_maintenance: ElapsedTime,
    /// The clock reading the elapsed time was computed against.
    pub generated_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Total cost with a rupee sign and thousands separators, e.g. `₹ 12,345`.
    pub fn formatted_cost(&self) -> String {
        format!("₹ {}", format_thousands(self.total_cost.into()))
    }
}

impl Display for DashboardSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<10} {:<16} {:<17} {}",
            "Serial No", "Component Name", "Last Maintenance", "Predictive Maintenance"
        )?;
        for record in &self.records {
            writeln!(
                f,
                "{:<10} {:<16} {:<17} {}",
                record.id, record.name, record.last_maintenance, record.predictive_maintenance
            )?;
        }
        writeln!(f, "Total maintenance cost: {}", self.formatted_cost())?;
        write!(
            f,
            "Time since last maintenance: {}",
            self.elapsed_since_last_maintenance
        )
    }
}

/// Groups digits in threes with commas: `1234567` becomes `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Time between the most recent `last_maintenance` and `now`.
///
/// The date counts from 00:00 UTC and partial days round up.
pub fn elapsed_since_latest(records: &[MaintenanceRecord], now: DateTime<Utc>) -> ElapsedTime {
    let Some(latest) = records.iter().map(|r| r.last_maintenance).max() else {
        return ElapsedTime::default();
    };
    let latest_start = latest.and_time(NaiveTime::MIN).and_utc();
    let diff_ms = (now - latest_start).num_milliseconds().unsigned_abs();
    ElapsedTime::from_days(diff_ms.div_ceil(MILLIS_PER_DAY))
}

/// Seeded RNG when a seed is given, otherwise one seeded from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Produces snapshots from an injected random source and clock.
#[derive(Debug)]
pub struct SnapshotGenerator<R, C> {
    rng: R,
    clock: C,
}

impl<R: Rng, C: Clock> SnapshotGenerator<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Runs one refresh cycle.
    pub fn refresh(&mut self) -> DashboardSnapshot {
        let records = generate_records(&mut self.rng);
        let total_cost = self.rng.gen_range(MIN_TOTAL_COST..MAX_TOTAL_COST);
        let now = self.clock.now();
        let elapsed_since_last_maintenance = elapsed_since_latest(&records, now);

        DashboardSnapshot {
            records,
            total_cost,
            elapsed_since_last_maintenance,
            generated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maintenance::clock::{FixedClock, MockClock};
    use chrono::{Days, NaiveDate, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: u32, last: NaiveDate) -> MaintenanceRecord {
        MaintenanceRecord {
            id,
            name: "Axle",
            last_maintenance: last,
            predictive_maintenance: date(2025, 6, 1),
        }
    }

    #[test]
    fn elapsed_uses_most_recent_date() {
        let latest = date(2024, 9, 1);
        let now = latest
            .checked_add_days(Days::new(95))
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let records = vec![
            record(1, date(2024, 2, 10)),
            record(2, latest),
            record(3, date(2024, 5, 30)),
        ];

        let elapsed = elapsed_since_latest(&records, now);
        assert_eq!(elapsed, ElapsedTime { months: 3, days: 5 });
        assert_eq!(elapsed.to_string(), "3 months, 5 days");
    }

    #[test]
    fn elapsed_rounds_partial_days_up() {
        let records = vec![record(1, date(2024, 12, 1))];
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 6, 0, 0).unwrap();

        // 30 days and 6 hours
        assert_eq!(
            elapsed_since_latest(&records, now),
            ElapsedTime { months: 1, days: 1 }
        );
    }

    #[test]
    fn elapsed_is_absolute_when_date_is_in_the_future() {
        let records = vec![record(1, date(2024, 12, 11))];
        let now = FixedClock::at_start_of(date(2024, 12, 1)).now();

        assert_eq!(
            elapsed_since_latest(&records, now),
            ElapsedTime { months: 0, days: 10 }
        );
    }

    #[test]
    fn elapsed_of_no_records_is_zero() {
        assert_eq!(elapsed_since_latest(&[], Utc::now()), ElapsedTime::default());
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(10_000), "10,000");
        assert_eq!(format_thousands(59_999), "59,999");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn total_cost_stays_in_range() {
        let clock = FixedClock::at_start_of(date(2025, 1, 1));
        let mut generator = SnapshotGenerator::new(seeded_rng(Some(5)), clock);

        for _ in 0..500 {
            let snapshot = generator.refresh();
            assert!((MIN_TOTAL_COST..MAX_TOTAL_COST).contains(&snapshot.total_cost));
        }
    }

    #[test]
    fn refresh_replaces_every_field_together() {
        let clock = FixedClock::at_start_of(date(2025, 1, 1));
        let mut generator = SnapshotGenerator::new(seeded_rng(Some(11)), clock);

        let first = generator.refresh();
        let second = generator.refresh();

        assert_ne!(first.records, second.records);
        for snapshot in [&first, &second] {
            assert_eq!(snapshot.records.len(), 5);
            assert_eq!(
                snapshot.elapsed_since_last_maintenance,
                elapsed_since_latest(&snapshot.records, snapshot.generated_at)
            );
        }
    }

    #[test]
    fn refresh_reads_the_injected_clock_once() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(instant);

        let mut generator = SnapshotGenerator::new(seeded_rng(Some(2)), clock);
        let snapshot = generator.refresh();

        assert_eq!(snapshot.generated_at, instant);
    }

    #[test]
    fn seeded_generators_agree() {
        let clock = FixedClock::at_start_of(date(2025, 2, 2));
        let a = SnapshotGenerator::new(seeded_rng(Some(77)), clock).refresh();
        let b = SnapshotGenerator::new(seeded_rng(Some(77)), clock).refresh();
        assert_eq!(a, b);
    }

    #[test]
    fn text_rendering_lists_every_component() {
        let clock = FixedClock::at_start_of(date(2025, 2, 2));
        let snapshot = SnapshotGenerator::new(seeded_rng(Some(1)), clock).refresh();
        let text = snapshot.to_string();

        for name in ["Axle", "Brake Pads", "Gearbox", "Traction Motor", "Coupler"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains(&snapshot.formatted_cost()));
        assert!(text.ends_with(&snapshot.elapsed_since_last_maintenance.to_string()));
    }
}
