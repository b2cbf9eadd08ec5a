//! cadence_core - pure functional core for expanding recurring events.
//!
//! Nothing in this crate performs I/O. Callers hand in event records and a
//! query window and get back materialized occurrences.

pub mod event;
pub mod recurrence;
pub mod serde;
