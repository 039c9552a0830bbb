mod cli_messages;
mod config;
mod consts;
mod error;
mod events;
mod logging;
mod maintenance;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::error::DashboardError;
use crate::maintenance::{FixedClock, SnapshotGenerator, SystemClock, seeded_rng};
use crate::session::{SessionOverrides, run_headless_mode, run_tui_mode, setup_session};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Railway component maintenance dashboard
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start monitoring on the dashboard
    Start {
        /// Print refreshes to the console instead of drawing the dashboard
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Milliseconds between refreshes (default 2000, or the config file value)
        #[arg(long, value_name = "MILLIS")]
        interval_ms: Option<u64>,

        /// Seed for reproducible data
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Stop after this many refreshes (headless mode only)
        #[arg(long, value_name = "COUNT", requires = "headless")]
        max_refreshes: Option<u64>,

        /// Paint a dark background behind the dashboard
        #[arg(long, action = ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Run one refresh cycle and print the result
    Snapshot {
        /// Seed for reproducible data
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Compute elapsed time as of 00:00 UTC on this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,

        /// Print as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Write settings to the config file
    Configure {
        /// Milliseconds between refreshes
        #[arg(long, value_name = "MILLIS")]
        interval_ms: Option<u64>,

        /// Paint a dark background behind the dashboard
        #[arg(long, value_name = "BOOL")]
        with_background: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            interval_ms,
            seed,
            max_refreshes,
            with_background,
        } => {
            let config = Config::load_or_default(&get_config_path()?).inspect_err(|e| {
                print_cmd_error!("Failed to load config", "{}", e);
            })?;
            let session = setup_session(
                config,
                SessionOverrides {
                    interval_ms,
                    with_background,
                    seed,
                    max_refreshes,
                },
            )?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Snapshot { seed, as_of, json } => {
            let rng = seeded_rng(seed);
            let snapshot = match as_of {
                Some(date) => {
                    let clock = FixedClock::at_start_of(parse_date(&date)?);
                    SnapshotGenerator::new(rng, clock).refresh()
                }
                None => SnapshotGenerator::new(rng, SystemClock).refresh(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", snapshot);
            }
            Ok(())
        }
        Command::Configure {
            interval_ms,
            with_background,
        } => {
            let config_path = get_config_path()?;
            let mut config = Config::load_or_default(&config_path)?;
            if interval_ms.is_none() && with_background.is_none() {
                print_cmd_info!(
                    "Current configuration",
                    "{} (refresh every {} ms, background {})",
                    config_path.display(),
                    config.refresh_interval_ms,
                    config.with_background_color
                );
                return Ok(());
            }
            if let Some(interval_ms) = interval_ms {
                config.refresh_interval_ms = interval_ms;
            }
            if let Some(with_background) = with_background {
                config.with_background_color = with_background;
            }
            config.save(&config_path).inspect_err(|e| {
                print_cmd_error!("Failed to save config", "{}", e);
            })?;
            print_cmd_success!(
                "Configuration saved",
                "{} (refresh every {} ms, background {})",
                config_path.display(),
                config.refresh_interval_ms,
                config.with_background_color
            );
            Ok(())
        }
    }
}

/// Parses a `YYYY-MM-DD` command-line date.
fn parse_date(input: &str) -> Result<NaiveDate, DashboardError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DashboardError::InvalidDate {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(matches!(
            parse_date("03/01/2025"),
            Err(DashboardError::InvalidDate { .. })
        ));
    }

    #[test]
    fn max_refreshes_requires_headless() {
        assert!(
            Args::try_parse_from(["railway-maintenance", "start", "--max-refreshes", "2"]).is_err()
        );
        assert!(
            Args::try_parse_from([
                "railway-maintenance",
                "start",
                "--headless",
                "--max-refreshes",
                "2"
            ])
            .is_ok()
        );
    }
}
