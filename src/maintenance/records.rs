//! Synthetic maintenance records
//!
//! One record per railway component, with dates sampled uniformly inside
//! fixed bounds.

use crate::consts::cli_consts::data::{
    COMPONENT_NAMES, LAST_MAINTENANCE_END, LAST_MAINTENANCE_START, PREDICTIVE_MAINTENANCE_END,
    PREDICTIVE_MAINTENANCE_START,
};
use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;

/// One row of the maintenance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceRecord {
    /// Position in the generation, starting at 1.
    pub id: u32,
    pub name: &'static str,
    pub last_maintenance: NaiveDate,
    pub predictive_maintenance: NaiveDate,
}

/// An inclusive range of calendar dates to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range; `None` if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Picks a date uniformly from `[start, end)`, or `start` for a single-day range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let span_days = (self.end - self.start).num_days().max(0) as u64;
        if span_days == 0 {
            return self.start;
        }
        let offset = rng.gen_range(0..span_days);
        // Offset is bounded by the span, so this cannot leave the range.
        let date = self
            .start
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.start);
        debug_assert!(self.contains(date));
        date
    }
}

/// Builds a range from the `(year, month, day)` tuples in the constants module.
fn fixed_range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    let to_date = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d);
    to_date(start)
        .zip(to_date(end))
        .and_then(|(start, end)| DateRange::new(start, end))
        .unwrap_or_else(|| unreachable!("maintenance date bounds are valid constants"))
}

/// Bounds for `last_maintenance`: the whole of 2024.
pub fn last_maintenance_range() -> DateRange {
    fixed_range(LAST_MAINTENANCE_START, LAST_MAINTENANCE_END)
}

/// Bounds for `predictive_maintenance`: December 2024 through 2025.
pub fn predictive_maintenance_range() -> DateRange {
    fixed_range(PREDICTIVE_MAINTENANCE_START, PREDICTIVE_MAINTENANCE_END)
}

/// Produces a fresh set of records, one per component in fixed order.
pub fn generate_records<R: Rng + ?Sized>(rng: &mut R) -> Vec<MaintenanceRecord> {
    let last_range = last_maintenance_range();
    let predictive_range = predictive_maintenance_range();

    COMPONENT_NAMES
        .into_iter()
        .zip(1u32..)
        .map(|(name, id)| MaintenanceRecord {
            id,
            name,
            last_maintenance: last_range.sample(&mut *rng),
            predictive_maintenance: predictive_range.sample(&mut *rng),
        })
        .collect()
}
