//! Occurrence and strategy rendering for stdout and stderr.

pub mod json;
pub mod pretty;
