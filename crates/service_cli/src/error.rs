//! CLI error types.

use paleo_bootstrap::BootstrapError;
use paleo_estimators::EstimatorError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `paleo` commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration file or override.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed direction file.
    #[error("Invalid input file: {0}")]
    Input(#[from] serde_json::Error),

    /// Bootstrap run failed or was rejected.
    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    /// Invalid estimator settings.
    #[error("Estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
