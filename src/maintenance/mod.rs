//! Synthetic maintenance data and its refresh cycle

pub mod clock;
pub mod records;
pub mod refresher;
pub mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use records::MaintenanceRecord;
pub use refresher::{RefreshHandle, spawn_refresher};
pub use snapshot::{DashboardSnapshot, ElapsedTime, SnapshotGenerator, seeded_rng};
