//! Expand command.

use std::path::PathBuf;

use cadence_core::recurrence::QueryWindow;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;

/// Expand recurring events inside a query window.
#[derive(Debug, Parser)]
pub struct ExpandCommand {
    /// JSON file holding an array of events, or "-" for stdin.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,
    /// Window start (YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]).
    #[arg(long, value_parser = parse_bound)]
    pub from: WindowBound,
    /// Window end, inclusive. A bare date covers the whole day.
    #[arg(long, value_parser = parse_bound)]
    pub to: WindowBound,
    /// Maximum occurrences per event. 0 means no cap.
    #[arg(long, env = "CADENCE_DEFAULT_LIMIT")]
    pub limit: Option<usize>,
    /// Safety limit span for open-ended series (e.g. "+5 year").
    #[arg(long, env = "CADENCE_SAFETY_LIMIT")]
    pub safety_limit: Option<String>,
    /// Exit with an error if any event is rejected or fails to expand.
    #[arg(long)]
    pub fail_fast: bool,
}

impl ExpandCommand {
    /// Builds the validated query window from the two bounds.
    pub fn window(&self) -> Result<QueryWindow, cadence_core::recurrence::RecurrenceError> {
        QueryWindow::try_new(self.from.start(), self.to.end())
    }
}

/// A window bound given either as a whole day or as an exact instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowBound {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl WindowBound {
    /// The earliest instant covered by this bound.
    pub fn start(&self) -> NaiveDateTime {
        match self {
            WindowBound::Date(date) => date.and_time(NaiveTime::MIN),
            WindowBound::DateTime(at) => *at,
        }
    }

    /// The latest instant covered by this bound.
    pub fn end(&self) -> NaiveDateTime {
        match self {
            WindowBound::Date(date) => QueryWindow::for_dates(*date, *date).to,
            WindowBound::DateTime(at) => *at,
        }
    }
}

/// Parses a window bound for clap.
pub fn parse_bound(s: &str) -> Result<WindowBound, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        return Ok(WindowBound::Date(date));
    }
    cadence_core::serde::parse_date_time(s)
        .map(WindowBound::DateTime)
        .ok_or_else(|| format!("invalid date or date-time: {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_bound_date() {
        assert_eq!(
            parse_bound("2024-01-03"),
            Ok(WindowBound::Date(make_date(2024, 1, 3)))
        );
    }

    #[test]
    fn test_parse_bound_date_time() {
        assert_eq!(
            parse_bound("2024-01-03T18:00"),
            Ok(WindowBound::DateTime(
                make_date(2024, 1, 3).and_hms_opt(18, 0, 0).unwrap()
            ))
        );
    }

    #[test]
    fn test_parse_bound_rejects_garbage() {
        assert!(parse_bound("tomorrow").is_err());
    }

    #[test]
    fn test_date_bounds_cover_whole_days() {
        let from = WindowBound::Date(make_date(2024, 1, 1));
        let to = WindowBound::Date(make_date(2024, 1, 22));

        assert_eq!(from.start(), make_date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(to.end().date(), make_date(2024, 1, 22));
        assert!(to.end() > make_date(2024, 1, 22).and_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn test_parse_expand_command() {
        let cli = Cli::try_parse_from([
            "cadence",
            "expand",
            "--input",
            "events.json",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-22",
            "--limit",
            "2",
        ])
        .unwrap();

        let Commands::Expand(expand) = cli.command else {
            panic!("expected expand command");
        };
        assert_eq!(expand.input, PathBuf::from("events.json"));
        assert_eq!(expand.limit, Some(2));
        assert!(!expand.fail_fast);

        let window = expand.window().unwrap();
        assert!(window.contains(make_date(2024, 1, 22).and_hms_opt(9, 0, 0).unwrap()));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let cli = Cli::try_parse_from([
            "cadence", "expand", "--from", "2024-02-01", "--to", "2024-01-01",
        ])
        .unwrap();

        let Commands::Expand(expand) = cli.command else {
            panic!("expected expand command");
        };
        assert!(expand.window().is_err());
    }
}
