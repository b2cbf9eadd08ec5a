//! Command execution, kept free of argument parsing and printing.

use std::collections::HashSet;

use cadence_core::event::Event;
use cadence_core::recurrence::{
    EventFailure, QueryWindow, RecurrenceRegistry, RecurrenceStrategy, SafetyLimit,
};
use serde::Serialize;

use crate::input::{partition_valid, RejectedEvent};

/// Everything produced by one `expand` invocation.
#[derive(Debug)]
pub struct ExpandOutcome {
    pub occurrences: Vec<Event>,
    /// Events that failed validation before expansion.
    pub rejected: Vec<RejectedEvent>,
    /// Valid events whose expansion failed, indexed into the input batch.
    pub failures: Vec<EventFailure>,
}

impl ExpandOutcome {
    /// Returns true if every input event was accepted and expanded.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.failures.is_empty()
    }
}

/// Validates and expands `events` through the default registry.
pub fn expand_events(
    events: Vec<Event>,
    window: QueryWindow,
    limit: Option<usize>,
    safety_limit: SafetyLimit,
) -> ExpandOutcome {
    let total = events.len();
    let (valid, rejected) = partition_valid(events);
    let registry = RecurrenceRegistry::with_safety_limit(safety_limit);

    let mut expansion = registry.expand(&valid, window, limit);

    // Failure indices point into `valid`; map them back to the input.
    let rejected_indices: HashSet<usize> = rejected.iter().map(|r| r.index).collect();
    let input_indices: Vec<usize> = (0..total)
        .filter(|index| !rejected_indices.contains(index))
        .collect();
    for failure in &mut expansion.failures {
        failure.index = input_indices[failure.index];
    }

    tracing::info!(
        events = valid.len(),
        rejected = rejected.len(),
        failed = expansion.failures.len(),
        occurrences = expansion.occurrences.len(),
        "expanded events"
    );

    ExpandOutcome {
        occurrences: expansion.occurrences,
        rejected,
        failures: expansion.failures,
    }
}

/// A registered strategy, as reported by `cadence strategies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub label: String,
    pub safety_limit: String,
}

/// Lists the strategies of the default registry.
pub fn list_strategies(safety_limit: SafetyLimit) -> Vec<StrategyInfo> {
    let registry: RecurrenceRegistry<Event> = RecurrenceRegistry::with_safety_limit(safety_limit);
    registry
        .labels()
        .into_iter()
        .filter_map(|label| registry.get(label))
        .map(|strategy| StrategyInfo {
            label: strategy.label().to_string(),
            safety_limit: strategy.safety_limit().to_string(),
        })
        .collect()
}
