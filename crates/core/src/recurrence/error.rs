use thiserror::Error;

/// Errors that can occur when configuring or running a recurrence strategy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Invalid recurrence configuration: {0}")]
    Configuration(String),
    #[error("Invalid event input: {0}")]
    InvalidInput(String),
    #[error("Date arithmetic out of range")]
    DateOutOfRange,
    #[error("Invalid query window: start must be before or equal to end")]
    InvalidWindow,
}

/// Result type for recurrence operations.
pub type Result<T> = std::result::Result<T, RecurrenceError>;
