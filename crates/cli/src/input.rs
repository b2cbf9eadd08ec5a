//! Reading event records from files or stdin.

use std::io::Read;
use std::path::Path;

use cadence_core::event::{validate_event, Event, EventError};

use crate::error::{CliError, Result};

/// An input event that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
    pub index: usize,
    pub title: String,
    pub error: EventError,
}

/// Reads a JSON array of events from `path`, or from stdin when `path` is "-".
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let json = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    tracing::debug!(path = %path.display(), bytes = json.len(), "read event input");
    parse_events(&json)
}

/// Parses a JSON array of events.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(CliError::InvalidInput(
            "expected a JSON array of events".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Splits events into the ones that pass validation and the ones that don't.
pub fn partition_valid(events: Vec<Event>) -> (Vec<Event>, Vec<RejectedEvent>) {
    let mut valid = Vec::with_capacity(events.len());
    let mut rejected = Vec::new();

    for (index, event) in events.into_iter().enumerate() {
        match validate_event(&event) {
            Ok(()) => valid.push(event),
            Err(error) => {
                tracing::warn!(index, title = %event.title, %error, "rejecting invalid event");
                rejected.push(RejectedEvent {
                    index,
                    title: event.title,
                    error,
                });
            }
        }
    }

    (valid, rejected)
}
