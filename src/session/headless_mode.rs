//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::Event;
use crate::maintenance::{
    RefreshHandle, SnapshotGenerator, SystemClock, seeded_rng, spawn_refresher,
};
use std::error::Error;
use std::future::Future;
use std::io::{self, Write};

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console output of every refresh
/// 2. Ctrl+C shutdown handling
/// 3. Stopping after `max_refreshes`, if set
///
/// # Arguments
/// * `session` - Session settings from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Writing to stdout failed
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.refresh_interval);

    let generator = SnapshotGenerator::new(seeded_rng(session.seed), SystemClock);
    let mut refresher = spawn_refresher(generator, session.refresh_interval);

    let result = {
        let mut stdout = io::stdout().lock();
        print_refreshes(
            &mut refresher,
            session.max_refreshes,
            tokio::signal::ctrl_c(),
            &mut stdout,
        )
        .await
    };

    print_session_shutdown();
    refresher.stop().await;
    result?;
    print_session_exit_success();

    Ok(())
}

/// Writes each snapshot to `out` until `max_refreshes` is reached, `shutdown`
/// resolves, or the refresher ends. Returns the number of refreshes written.
pub async fn print_refreshes<F, W>(
    refresher: &mut RefreshHandle,
    max_refreshes: Option<u64>,
    shutdown: F,
    out: &mut W,
) -> io::Result<u64>
where
    F: Future,
    W: Write,
{
    tokio::pin!(shutdown);
    let mut cycle = 0u64;

    loop {
        tokio::select! {
            next = refresher.next() => {
                let Some(snapshot) = next else { break };
                cycle += 1;
                writeln!(out, "{}", Event::refresh(cycle, &snapshot))?;
                writeln!(out, "{}\n", snapshot)?;
                out.flush()?;
                if max_refreshes.is_some_and(|max| cycle >= max) {
                    break;
                }
            }
            _ = &mut shutdown => break,
        }
    }

    Ok(cycle)
}
