pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all fixed constants for the maintenance dashboard,
    //! organized by functional area.

    // =============================================================================
    // ACTIVITY LOG CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying snapshots from the refresher to the UI.
    pub const SNAPSHOT_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Refresh cadence configuration
    pub mod refresh {
        /// Interval between two refresh cycles (milliseconds)
        pub const DEFAULT_INTERVAL_MS: u64 = 2000;

        /// How long the splash screen stays up before the dashboard mounts (seconds)
        pub const SPLASH_DURATION_SECS: u64 = 2;
    }

    // =============================================================================
    // SYNTHETIC DATA CONFIGURATION
    // =============================================================================

    /// Bounds used when sampling synthetic maintenance data
    pub mod data {
        /// Component names, assigned to records by position.
        pub const COMPONENT_NAMES: [&str; 5] =
            ["Axle", "Brake Pads", "Gearbox", "Traction Motor", "Coupler"];

        /// Bounds for the last maintenance date (year, month, day).
        pub const LAST_MAINTENANCE_START: (i32, u32, u32) = (2024, 1, 1);
        pub const LAST_MAINTENANCE_END: (i32, u32, u32) = (2024, 12, 31);

        /// Bounds for the predicted maintenance date (year, month, day).
        pub const PREDICTIVE_MAINTENANCE_START: (i32, u32, u32) = (2024, 12, 1);
        pub const PREDICTIVE_MAINTENANCE_END: (i32, u32, u32) = (2025, 12, 31);

        /// Total cost range, lower bound inclusive and upper bound exclusive.
        pub const MIN_TOTAL_COST: u32 = 10_000;
        pub const MAX_TOTAL_COST: u32 = 60_000;

        /// Fixed month length used for the elapsed time display.
        pub const DAYS_PER_MONTH: u64 = 30;
    }
}
