//! Pretty output formatting.

use cadence_core::event::Event;
use cadence_core::serde::DATE_TIME_FORMAT;

use crate::input::RejectedEvent;
use crate::run::StrategyInfo;

/// Format an occurrence for display.
pub fn format_occurrence(occurrence: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Start: {}\n  End: {}",
        occurrence.title,
        occurrence.id,
        occurrence.start_date.format(DATE_TIME_FORMAT),
        occurrence.end_date.format(DATE_TIME_FORMAT)
    );
    if let Some(loc) = &occurrence.location {
        output.push_str(&format!("\n  Location: {}", loc));
    }
    if let Some(desc) = &occurrence.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format occurrences for display.
pub fn format_occurrences(occurrences: &[Event]) -> String {
    if occurrences.is_empty() {
        return "No occurrences found.".to_string();
    }
    let mut output = format!("OCCURRENCES ({})\n", occurrences.len());
    output.push_str(&"-".repeat(40));
    for occurrence in occurrences {
        output.push_str(&format!("\n{}", format_occurrence(occurrence)));
        output.push('\n');
    }
    output
}

/// Format a rejected event for display.
pub fn format_rejected(rejected: &RejectedEvent) -> String {
    format!(
        "event #{} ({:?}) rejected: {}",
        rejected.index, rejected.title, rejected.error
    )
}

/// Format strategies for display.
pub fn format_strategies(strategies: &[StrategyInfo]) -> String {
    if strategies.is_empty() {
        return "No strategies registered.".to_string();
    }
    let mut output = format!("STRATEGIES ({})\n", strategies.len());
    output.push_str(&"-".repeat(40));
    for strategy in strategies {
        output.push_str(&format!(
            "\n{}\n  Safety limit: {}",
            strategy.label, strategy.safety_limit
        ));
        output.push('\n');
    }
    output
}
