use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".railway-maintenance").join("config.json")
}

const BINARY_NAME: &str = "railway-maintenance";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Railway component maintenance dashboard"))
        .stdout(contains("snapshot"))
        .stdout(contains("configure"));
}

#[test]
/// A seeded JSON snapshot lists every component and the total cost.
fn snapshot_json_lists_components() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--seed", "7", "--json"])
        .assert()
        .success()
        .stdout(contains("\"Axle\""))
        .stdout(contains("\"Traction Motor\""))
        .stdout(contains("\"total_cost\""));
}

#[test]
/// The same seed and date produce the same snapshot.
fn snapshot_is_reproducible_with_seed() {
    let run = || {
        let output = Command::cargo_bin(BINARY_NAME)
            .unwrap()
            .args(["snapshot", "--seed", "11", "--as-of", "2025-06-01"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
/// The table output reports the elapsed time in months and days.
fn snapshot_as_of_reports_elapsed_time() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--seed", "3", "--as-of", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("months"))
        .stdout(contains("₹"));
}

#[test]
/// A malformed date is rejected.
fn snapshot_rejects_invalid_date() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--as-of", "01/01/2025"])
        .assert()
        .failure()
        .stderr(contains("01/01/2025"));
}

#[test]
/// Headless mode stops after the requested number of refreshes.
fn headless_start_stops_after_max_refreshes() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args([
        "start",
        "--headless",
        "--seed",
        "5",
        "--interval-ms",
        "10",
        "--max-refreshes",
        "2",
    ])
    .env("HOME", tmp.path()) // simulate different $HOME
    .assert()
    .success()
    .stdout(contains("Refresh #1").and(contains("Refresh #2")))
    .stdout(contains("Refresh #3").not())
    .stdout(contains("exited successfully"));
}

#[test]
/// A zero interval is rejected before anything starts.
fn start_rejects_zero_interval() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--interval-ms", "0"])
        .env("HOME", tmp.path())
        .assert()
        .failure();
}

#[test]
/// Configure command should write the settings to the config file.
fn configure_writes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["configure", "--interval-ms", "500", "--with-background", "true"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(saved["refresh_interval_ms"], 500);
    assert_eq!(saved["with_background_color"], true);
}

#[test]
/// The saved interval is picked up by the next session.
fn start_uses_configured_interval() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{ "refresh_interval_ms": 20 }"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--max-refreshes", "1"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("refreshing every 20 ms"));
}
