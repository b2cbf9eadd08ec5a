use std::env;

use cadence_core::recurrence::{RecurrenceError, SafetyLimit};

/// Default safety limit applied to open-ended series.
pub const DEFAULT_SAFETY_LIMIT: &str = "+5 year";

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Safety limit span, e.g. "+5 year" (default: "+5 year")
    pub safety_limit: String,
    /// Per-event occurrence cap when `--limit` is not given (default: none)
    pub default_limit: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CADENCE_SAFETY_LIMIT` - Safety limit span (default: "+5 year")
    /// - `CADENCE_DEFAULT_LIMIT` - Per-event occurrence cap (default: none)
    pub fn from_env() -> Self {
        Self {
            safety_limit: env::var("CADENCE_SAFETY_LIMIT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SAFETY_LIMIT.to_string()),
            default_limit: env::var("CADENCE_DEFAULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_overrides(mut self, safety_limit: Option<String>, limit: Option<usize>) -> Self {
        if let Some(safety_limit) = safety_limit {
            self.safety_limit = safety_limit;
        }
        if limit.is_some() {
            self.default_limit = limit;
        }
        self
    }

    /// Parses and validates the configured safety limit.
    pub fn safety_limit(&self) -> Result<SafetyLimit, RecurrenceError> {
        self.safety_limit.parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            safety_limit: DEFAULT_SAFETY_LIMIT.to_string(),
            default_limit: None,
        }
    }
}
