//! Dashboard state update logic
//!
//! Mount, unmount and per-frame updates of the dashboard state

use super::state::DashboardState;

use crate::events::Event;
use crate::maintenance::{DashboardSnapshot, SnapshotGenerator, SystemClock, spawn_refresher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::Instant;

impl DashboardState {
    /// Update the dashboard state with new tick and any snapshots the refresher produced.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(snapshot) = self.refresher_mut().and_then(|r| r.try_next()) {
            self.apply_snapshot(snapshot);
        }
    }

    /// Replace the displayed data with `snapshot`.
    fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        let event = Event::refresh(self.refresh_count() + 1, &snapshot);
        self.set_snapshot(snapshot);
        self.add_to_activity_log(event);
    }

    /// Start a monitoring session: refresh now, then once per interval.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_monitoring(&mut self) {
        if self.is_monitoring() {
            self.add_to_activity_log(Event::ignored("Monitoring already running"));
            return;
        }

        let session_seed: u64 = self.seed_source_mut().r#gen();
        let generator = SnapshotGenerator::new(StdRng::seed_from_u64(session_seed), SystemClock);
        let handle = spawn_refresher(generator, self.refresh_interval);
        self.set_refresher(Some(handle));
        self.add_to_activity_log(Event::monitoring_started(self.refresh_interval));
    }

    /// Stop the monitoring session. The last snapshot stays on screen.
    pub fn stop_monitoring(&mut self) {
        match self.set_refresher(None) {
            Some(handle) => {
                drop(handle);
                self.add_to_activity_log(Event::monitoring_stopped());
            }
            None => self.add_to_activity_log(Event::ignored("Monitoring already stopped")),
        }
    }

    /// Tear down the dashboard, waiting for the refresher task to exit.
    pub async fn unmount(&mut self) {
        if let Some(handle) = self.set_refresher(None) {
            handle.stop().await;
        }
    }

    /// Fraction of the interval elapsed since the last refresh, while monitoring.
    pub fn refresh_progress(&self) -> Option<f64> {
        if !self.is_monitoring() {
            return None;
        }
        let interval = self.refresh_interval.as_secs_f64();
        let progress = match self.last_refresh_at() {
            Some(at) if interval > 0.0 => {
                Instant::now().duration_since(at).as_secs_f64() / interval
            }
            _ => 0.0,
        };
        Some(progress.clamp(0.0, 1.0))
    }
}
