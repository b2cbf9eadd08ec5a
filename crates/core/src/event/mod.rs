mod error;
mod operations;
mod types;

pub use error::EventError;
pub use operations::validate_event;
pub use types::{Event, RecurringEvent};
