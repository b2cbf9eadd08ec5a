use crate::event::RecurringEvent;

use super::{QueryWindow, RecurrenceError, Result, SafetyLimit};

/// An event that could not be expanded, identified by its position in the
/// input batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFailure {
    pub index: usize,
    pub error: RecurrenceError,
}

/// The result of expanding a batch of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<E> {
    /// Occurrences in event input order, then chronological.
    pub occurrences: Vec<E>,
    /// Events that were skipped because they could not be expanded.
    pub failures: Vec<EventFailure>,
}

impl<E> Expansion<E> {
    pub fn new() -> Self {
        Self {
            occurrences: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns true if every applicable event was expanded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Records the outcome of expanding the event at `index`.
    ///
    /// Failures are logged and kept aside so the rest of the batch survives.
    pub(crate) fn record(&mut self, index: usize, label: &str, outcome: Result<Vec<E>>) {
        match outcome {
            Ok(occurrences) => self.occurrences.extend(occurrences),
            Err(error) => {
                tracing::warn!(index, label, %error, "skipping event that could not be expanded");
                self.failures.push(EventFailure { index, error });
            }
        }
    }
}

impl<E> Default for Expansion<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A recurrence frequency that knows how to turn a series definition into
/// concrete occurrences.
///
/// Implementors only provide the per-event expansion; label filtering and
/// per-event failure isolation come from the provided methods.
pub trait RecurrenceStrategy<E: RecurringEvent>: Send + Sync {
    /// Label stored on events that this strategy expands, e.g. `"weekly"`.
    fn label(&self) -> &str;

    /// Absolute ceiling on how far a single series is expanded.
    fn safety_limit(&self) -> SafetyLimit;

    /// Expands one event into its occurrences inside `window`.
    ///
    /// `limit` caps the number of occurrences for this event. `Some(0)`
    /// means no cap, like `None`. The event's label is not checked here.
    fn expand_event(&self, event: &E, window: QueryWindow, limit: Option<usize>) -> Result<Vec<E>>;

    /// Returns true if the event carries this strategy's label.
    fn applies_to(&self, event: &E) -> bool {
        event.recurrence_type() == Some(self.label())
    }

    /// Expands every applicable event, isolating per-event failures.
    fn expand(&self, events: &[E], window: QueryWindow, limit: Option<usize>) -> Expansion<E> {
        let mut expansion = Expansion::new();
        for (index, event) in events.iter().enumerate() {
            if !self.applies_to(event) {
                continue;
            }
            expansion.record(index, self.label(), self.expand_event(event, window, limit));
        }
        expansion
    }

    /// Expands every applicable event, dropping the ones that fail.
    fn generate_occurrences(
        &self,
        events: &[E],
        window: QueryWindow,
        limit: Option<usize>,
    ) -> Vec<E> {
        self.expand(events, window, limit).occurrences
    }
}
