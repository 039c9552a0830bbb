//! Session setup and initialization

use crate::config::Config;
use crate::error::DashboardError;
use std::time::Duration;

/// Values given on the command line, each overriding the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOverrides {
    pub interval_ms: Option<u64>,
    pub with_background: bool,
    pub seed: Option<u64>,
    pub max_refreshes: Option<u64>,
}

/// Session settings for both TUI and headless modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// Time between two refresh cycles
    pub refresh_interval: Duration,
    /// Whether to paint a background color in the TUI
    pub with_background_color: bool,
    /// Seed for reproducible data
    pub seed: Option<u64>,
    /// Headless mode stops after this many refreshes
    pub max_refreshes: Option<u64>,
}

/// Sets up a session from the config file and command-line overrides
///
/// # Arguments
/// * `config` - Configuration loaded from disk, or defaults
/// * `overrides` - Flags given on the command line
///
/// # Returns
/// * `Ok(SessionData)` - Settings ready for either mode
/// * `Err` - The resolved interval is zero
pub fn setup_session(
    config: Config,
    overrides: SessionOverrides,
) -> Result<SessionData, DashboardError> {
    let resolved = Config {
        refresh_interval_ms: overrides
            .interval_ms
            .unwrap_or(config.refresh_interval_ms),
        with_background_color: overrides.with_background || config.with_background_color,
    };
    resolved.validate()?;

    if overrides.max_refreshes == Some(0) {
        return Err(DashboardError::InvalidConfig(
            "max refreshes must be greater than zero".to_string(),
        ));
    }

    Ok(SessionData {
        refresh_interval: resolved.refresh_interval(),
        with_background_color: resolved.with_background_color,
        seed: overrides.seed,
        max_refreshes: overrides.max_refreshes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_values_apply_without_overrides() {
        let config = Config {
            refresh_interval_ms: 750,
            with_background_color: true,
        };
        let session = setup_session(config, SessionOverrides::default()).unwrap();
        assert_eq!(session.refresh_interval, Duration::from_millis(750));
        assert!(session.with_background_color);
        assert_eq!(session.seed, None);
    }

    #[test]
    fn command_line_overrides_config() {
        let overrides = SessionOverrides {
            interval_ms: Some(100),
            with_background: true,
            seed: Some(3),
            max_refreshes: Some(2),
        };
        let session = setup_session(Config::default(), overrides).unwrap();
        assert_eq!(session.refresh_interval, Duration::from_millis(100));
        assert!(session.with_background_color);
        assert_eq!(session.seed, Some(3));
        assert_eq!(session.max_refreshes, Some(2));
    }

    #[test]
    fn zero_values_are_rejected() {
        let zero_interval = SessionOverrides {
            interval_ms: Some(0),
            ..Default::default()
        };
        assert!(setup_session(Config::default(), zero_interval).is_err());

        let zero_refreshes = SessionOverrides {
            max_refreshes: Some(0),
            ..Default::default()
        };
        assert!(setup_session(Config::default(), zero_refreshes).is_err());
    }
}
