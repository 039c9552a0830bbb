//! Dashboard state management
//!
//! Contains the main dashboard state struct. The displayed data is a single
//! [`DashboardSnapshot`], only ever replaced as a whole.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::maintenance::{DashboardSnapshot, RefreshHandle};
use crate::ui::app::UIConfig;

use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Dashboard state: current snapshot, monitoring session and activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// When the dashboard was mounted.
    pub start_time: Instant,
    /// Time between two refresh cycles.
    pub refresh_interval: Duration,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,

    /// Data currently on screen.
    snapshot: Option<DashboardSnapshot>,
    /// Number of snapshots applied since mount.
    refresh_count: u64,
    /// When the current snapshot was applied.
    last_refresh_at: Option<Instant>,
    /// The running refresher, present while monitoring.
    refresher: Option<RefreshHandle>,
    /// Seeds one generator per monitoring session.
    seed_source: StdRng,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state. Monitoring is not started.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            refresh_interval: ui_config.refresh_interval,
            with_background_color: ui_config.with_background_color,
            activity_logs: VecDeque::new(),
            tick: 0,
            snapshot: None,
            refresh_count: 0,
            last_refresh_at: None,
            refresher: None,
            seed_source: crate::maintenance::seeded_rng(ui_config.seed),
        }
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub fn last_refresh_at(&self) -> Option<Instant> {
        self.last_refresh_at
    }

    pub fn is_monitoring(&self) -> bool {
        self.refresher.is_some()
    }

    // Setters for the updaters
    pub(super) fn set_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.refresh_count += 1;
        self.snapshot = Some(snapshot);
        self.last_refresh_at = Some(Instant::now());
    }

    pub(super) fn refresher_mut(&mut self) -> Option<&mut RefreshHandle> {
        self.refresher.as_mut()
    }

    pub(super) fn set_refresher(&mut self, refresher: Option<RefreshHandle>) -> Option<RefreshHandle> {
        std::mem::replace(&mut self.refresher, refresher)
    }

    pub(super) fn seed_source_mut(&mut self) -> &mut StdRng {
        &mut self.seed_source
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
