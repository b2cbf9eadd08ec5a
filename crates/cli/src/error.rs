//! CLI error types.

use cadence_core::recurrence::RecurrenceError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
