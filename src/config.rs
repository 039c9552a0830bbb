//! Application configuration.

use crate::consts::cli_consts::refresh::DEFAULT_INTERVAL_MS;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

/// Directory under the user's home holding the config file.
const CONFIG_DIR: &str = ".railway-maintenance";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between two refresh cycles.
    pub refresh_interval_ms: u64,
    /// Paint a dark background behind the dashboard.
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_INTERVAL_MS,
            with_background_color: false,
        }
    }
}

impl Config {
    /// The refresh interval as a [`Duration`].
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Rejects values the refresher cannot run with.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.refresh_interval_ms == 0 {
            return Err(DashboardError::InvalidConfig(
                "refresh_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a [`DashboardError`] if reading from file fails, the JSON is invalid,
    /// or the loaded values do not validate.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, or falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, DashboardError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Location of the config file: `$HOME/.railway-maintenance/config.json`.
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    let home_path = home::home_dir().ok_or(DashboardError::HomeDirNotFound)?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}
