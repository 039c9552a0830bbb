//! Periodic refresh worker
//!
//! Spawns a tokio task that produces a snapshot immediately and then once per
//! interval. The task lives exactly as long as its [`RefreshHandle`].

use super::clock::Clock;
use super::snapshot::{DashboardSnapshot, SnapshotGenerator};
use crate::consts::cli_consts::SNAPSHOT_QUEUE_SIZE;
use log::debug;
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Owns a running refresher. Dropping it cancels the timer and discards any
/// snapshot that has not been received yet.
#[derive(Debug)]
pub struct RefreshHandle {
    receiver: mpsc::Receiver<DashboardSnapshot>,
    cancel: CancellationToken,
    join_handle: JoinHandle<()>,
}

impl RefreshHandle {
    /// Next snapshot if one is ready, without waiting.
    pub fn try_next(&mut self) -> Option<DashboardSnapshot> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next snapshot. `None` once the worker has stopped.
    pub async fn next(&mut self) -> Option<DashboardSnapshot> {
        self.receiver.recv().await
    }

    /// Cancels the timer and waits for the worker task to exit.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        self.receiver.close();
        let _ = (&mut self.join_handle).await;
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Starts refreshing with the given generator.
///
/// Must be called from within a tokio runtime.
pub fn spawn_refresher<R, C>(
    mut generator: SnapshotGenerator<R, C>,
    interval: Duration,
) -> RefreshHandle
where
    R: Rng + Send + 'static,
    C: Clock + 'static,
{
    let (sender, receiver) = mpsc::channel(SNAPSHOT_QUEUE_SIZE);
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();

    let join_handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycle: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = worker_cancel.cancelled() => break,
                _ = ticker.tick() => {
                    cycle += 1;
                    let snapshot = generator.refresh();
                    debug!("refresh cycle {} generated", cycle);
                    tokio::select! {
                        biased;
                        _ = worker_cancel.cancelled() => break,
                        sent = sender.send(snapshot) => {
                            if sent.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        }
        debug!("refresher stopped after {} cycles", cycle);
    });

    RefreshHandle {
        receiver,
        cancel,
        join_handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maintenance::clock::FixedClock;
    use crate::maintenance::snapshot::seeded_rng;
    use chrono::NaiveDate;
    use tokio::time::Instant;

    fn generator(seed: u64) -> SnapshotGenerator<rand::rngs::StdRng, FixedClock> {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        SnapshotGenerator::new(seeded_rng(Some(seed)), FixedClock::at_start_of(today))
    }

    #[tokio::test(start_paused = true)]
    async fn first_refresh_is_immediate() {
        let start = Instant::now();
        let mut handle = spawn_refresher(generator(1), Duration::from_millis(2000));

        let snapshot = handle.next().await.expect("first snapshot");
        assert_eq!(snapshot.records.len(), 5);
        assert!(start.elapsed() < Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_once_per_interval() {
        let start = Instant::now();
        let mut handle = spawn_refresher(generator(2), Duration::from_millis(2000));

        for _ in 0..3 {
            handle.next().await.expect("snapshot");
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(4000), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(6000), "{:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn snapshots_follow_the_seeded_sequence() {
        let mut expected = generator(3);
        let mut handle = spawn_refresher(generator(3), Duration::from_millis(2000));

        for _ in 0..3 {
            assert_eq!(handle.next().await, Some(expected.refresh()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_the_worker() {
        let mut handle = spawn_refresher(generator(4), Duration::from_millis(2000));
        handle.next().await.expect("first snapshot");

        // Returns only once the task has exited.
        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_timer() {
        let handle = spawn_refresher(generator(5), Duration::from_millis(2000));
        let token = handle.cancel.clone();
        assert!(!token.is_cancelled());
        drop(handle);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert!(token.is_cancelled());
    }
}
