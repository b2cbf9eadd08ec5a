//! The safety limit: an absolute ceiling on how far a series is expanded.
//!
//! Open-ended series would otherwise produce occurrences until the end of
//! the query window, which callers are free to set decades away. The limit
//! is measured from the first aligned occurrence, independently of the
//! window and of the series' own end date.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDateTime};

use super::{RecurrenceError, Result};

/// Calendar unit of a [`SafetyLimit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanUnit {
    Day,
    Week,
    Month,
    Year,
}

impl SpanUnit {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "day" | "days" => Some(SpanUnit::Day),
            "w" | "week" | "weeks" => Some(SpanUnit::Week),
            "m" | "month" | "months" => Some(SpanUnit::Month),
            "y" | "year" | "years" => Some(SpanUnit::Year),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SpanUnit::Day => "day",
            SpanUnit::Week => "week",
            SpanUnit::Month => "month",
            SpanUnit::Year => "year",
        }
    }
}

/// A positive calendar span such as "+5 year".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SafetyLimit {
    amount: u32,
    unit: SpanUnit,
}

impl SafetyLimit {
    /// Creates a limit, rejecting zero-length spans.
    pub fn new(amount: u32, unit: SpanUnit) -> Result<Self> {
        if amount == 0 {
            return Err(RecurrenceError::Configuration(
                "safety limit must be positive".to_string(),
            ));
        }
        Ok(Self { amount, unit })
    }

    /// Shorthand for a limit of whole years.
    pub fn years(amount: u32) -> Result<Self> {
        Self::new(amount, SpanUnit::Year)
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn unit(&self) -> SpanUnit {
        self.unit
    }

    /// Adds the span to `from`.
    ///
    /// Month and year spans are calendar-aware: adding one year to Feb 29
    /// lands on Feb 28. Returns `None` on overflow.
    pub fn apply(&self, from: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.unit {
            SpanUnit::Day => from.checked_add_days(Days::new(u64::from(self.amount))),
            SpanUnit::Week => from.checked_add_days(Days::new(u64::from(self.amount) * 7)),
            SpanUnit::Month => from.checked_add_months(Months::new(self.amount)),
            SpanUnit::Year => self
                .amount
                .checked_mul(12)
                .and_then(|months| from.checked_add_months(Months::new(months))),
        }
    }
}

impl Default for SafetyLimit {
    fn default() -> Self {
        Self {
            amount: 5,
            unit: SpanUnit::Year,
        }
    }
}

impl fmt::Display for SafetyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.amount == 1 { "" } else { "s" };
        write!(f, "+{} {}{}", self.amount, self.unit.as_str(), plural)
    }
}

impl FromStr for SafetyLimit {
    type Err = RecurrenceError;

    /// Parses `+5 year`, `5 years`, `18months`, or a single-component ISO 8601
    /// duration such as `P5Y`, `P18M`, `P2W`, `P90D`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || RecurrenceError::Configuration(format!("malformed safety limit: {s:?}"));

        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(RecurrenceError::Configuration(format!(
                "safety limit must be positive: {s:?}"
            )));
        }

        let body = match trimmed.strip_prefix('P').or_else(|| trimmed.strip_prefix('p')) {
            Some(iso) => iso,
            None => trimmed.strip_prefix('+').unwrap_or(trimmed).trim_start(),
        };

        let digits_end = body
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(body.len());
        let (digits, unit) = body.split_at(digits_end);
        if digits.is_empty() {
            return Err(malformed());
        }

        let amount: u32 = digits.parse().map_err(|_| malformed())?;
        let unit = SpanUnit::parse(unit.trim()).ok_or_else(malformed)?;

        Self::new(amount, unit)
    }
}
