mod error;
mod limit;
mod registry;
mod strategy;
mod weekly;
mod window;

pub use error::{RecurrenceError, Result};
pub use limit::{SafetyLimit, SpanUnit};
pub use registry::RecurrenceRegistry;
pub use strategy::{EventFailure, Expansion, RecurrenceStrategy};
pub use weekly::{WeeklyRecurrence, WEEKLY_LABEL};
pub use window::QueryWindow;
