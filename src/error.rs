//! Error types for the dashboard CLI

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Terminal or file system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file exists but is not valid JSON for [`crate::config::Config`].
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The config parsed but holds a value the dashboard cannot run with.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No home directory to place the config file in.
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// A date argument that is not `YYYY-MM-DD`.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
}
