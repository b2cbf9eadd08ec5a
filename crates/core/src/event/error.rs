use thiserror::Error;

/// Errors that can occur when validating an event record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("End date must be after or equal to start date")]
    InvalidDateRange,
    #[error("Recurrence end date must not be before the start date")]
    UntilBeforeStart,
}
