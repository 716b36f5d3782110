//! CLI error type.

use thiserror::Error;

use calc_core::errors::CalcError;

use crate::config::ConfigError;

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the terminal
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{} ({})", .0, .0.error_code())]
    Calc(#[from] CalcError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} worksheet items failed")]
    WorksheetFailed { failed: usize, total: usize },
}
