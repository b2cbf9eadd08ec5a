use std::collections::HashMap;

use crate::event::RecurringEvent;

use super::{Expansion, QueryWindow, RecurrenceStrategy, SafetyLimit, WeeklyRecurrence};

/// Maps recurrence labels to the strategies that expand them.
///
/// The registry walks a batch once, in input order, handing each recurring
/// event to the strategy registered under its label. Occurrences therefore
/// come out grouped by event, chronological within each event.
pub struct RecurrenceRegistry<E: RecurringEvent> {
    strategies: HashMap<String, Box<dyn RecurrenceStrategy<E>>>,
}

impl<E: RecurringEvent + 'static> RecurrenceRegistry<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in strategies and their default limits.
    pub fn with_defaults() -> Self {
        Self::with_safety_limit(SafetyLimit::default())
    }

    /// Creates a registry with the built-in strategies sharing one safety limit.
    pub fn with_safety_limit(safety_limit: SafetyLimit) -> Self {
        let mut registry = Self::new();
        registry.register(WeeklyRecurrence::with_safety_limit(safety_limit));
        registry
    }

    /// Registers a strategy under its label, returning the one it replaces.
    pub fn register<S>(&mut self, strategy: S) -> Option<Box<dyn RecurrenceStrategy<E>>>
    where
        S: RecurrenceStrategy<E> + 'static,
    {
        let label = strategy.label().to_string();
        self.strategies.insert(label, Box::new(strategy))
    }

    /// Gets the strategy registered under `label`.
    pub fn get(&self, label: &str) -> Option<&dyn RecurrenceStrategy<E>> {
        self.strategies.get(label).map(|strategy| strategy.as_ref())
    }

    /// Returns the registered labels in alphabetical order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Expands every recurring event with the strategy matching its label.
    ///
    /// One-off events and events with an unknown label produce nothing.
    /// Events that fail to expand are reported in [`Expansion::failures`].
    pub fn expand(&self, events: &[E], window: QueryWindow, limit: Option<usize>) -> Expansion<E> {
        let mut expansion = Expansion::new();
        for (index, event) in events.iter().enumerate() {
            let Some(label) = event.recurrence_type() else {
                continue;
            };
            let Some(strategy) = self.get(label) else {
                tracing::debug!(index, label, "no recurrence strategy registered");
                continue;
            };
            expansion.record(index, label, strategy.expand_event(event, window, limit));
        }
        expansion
    }

    /// Expands every recurring event, dropping the ones that fail.
    pub fn generate_occurrences(
        &self,
        events: &[E],
        window: QueryWindow,
        limit: Option<usize>,
    ) -> Vec<E> {
        self.expand(events, window, limit).occurrences
    }
}

impl<E: RecurringEvent + 'static> Default for RecurrenceRegistry<E> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
