use chrono::{Datelike, Days, Duration, NaiveDate, NaiveTime};

use crate::event::RecurringEvent;

use super::window::end_of_day;
use super::{QueryWindow, RecurrenceError, RecurrenceStrategy, Result, SafetyLimit};

/// Label carried by events that repeat every week.
pub const WEEKLY_LABEL: &str = "weekly";

/// Expands events that repeat on the same weekday and time every week.
#[derive(Debug, Clone, Default)]
pub struct WeeklyRecurrence {
    safety_limit: SafetyLimit,
}

impl WeeklyRecurrence {
    /// Creates a weekly strategy with the default five year safety limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a weekly strategy with a custom safety limit.
    pub fn with_safety_limit(safety_limit: SafetyLimit) -> Self {
        Self { safety_limit }
    }

    /// Creates a weekly strategy from a textual limit such as `"+5 year"`.
    pub fn try_from_limit(limit: &str) -> Result<Self> {
        Ok(Self::with_safety_limit(limit.parse()?))
    }
}

impl<E: RecurringEvent> RecurrenceStrategy<E> for WeeklyRecurrence {
    fn label(&self) -> &str {
        WEEKLY_LABEL
    }

    fn safety_limit(&self) -> SafetyLimit {
        self.safety_limit
    }

    fn expand_event(&self, event: &E, window: QueryWindow, limit: Option<usize>) -> Result<Vec<E>> {
        let limit = limit.filter(|limit| *limit > 0);
        let series_start = event.start_date();
        let duration = event.duration();
        if duration < Duration::zero() {
            return Err(RecurrenceError::InvalidInput(format!(
                "event ends at {} before it starts at {}",
                event.end_date(),
                series_start
            )));
        }

        let time_of_day = series_start.time();
        let weekday = series_start.weekday();

        // First instant on the event's weekday that is not before the window
        // or the series start. Moving to a later day resets to midnight, so
        // every time on that day is eligible.
        let mut start_marker = window.from.max(series_start);
        while start_marker.weekday() != weekday {
            start_marker = next_day(start_marker.date())?.and_time(NaiveTime::MIN);
        }

        let max_end_marker = self
            .safety_limit
            .apply(start_marker)
            .ok_or(RecurrenceError::DateOutOfRange)?;

        let mut end_marker = window.to.min(max_end_marker);
        if let Some(until) = event.recurrence_until() {
            end_marker = end_marker.min(end_of_day(until));
        }

        let mut occurrences: Vec<E> = Vec::new();
        for date in week_steps(start_marker.date(), end_marker.date()) {
            if limit.is_some_and(|limit| occurrences.len() >= limit) {
                break;
            }

            let occurrence_start = date.and_time(time_of_day);
            if occurrence_start < start_marker {
                continue;
            }
            if occurrence_start > end_marker {
                break;
            }

            let occurrence_end = occurrence_start
                .checked_add_signed(duration)
                .ok_or(RecurrenceError::DateOutOfRange)?;

            let mut occurrence = event.clone();
            occurrence.set_start_date(occurrence_start);
            occurrence.set_end_date(occurrence_end);
            occurrence.clear_recurrence_type();
            occurrences.push(occurrence);
        }

        tracing::debug!(
            label = WEEKLY_LABEL,
            start = %start_marker,
            end = %end_marker,
            count = occurrences.len(),
            "expanded weekly event"
        );

        Ok(occurrences)
    }
}

fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or(RecurrenceError::DateOutOfRange)
}

/// Lazily yields `first`, `first + 7 days`, ... up to and including `last`.
fn week_steps(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(first), |date| date.checked_add_days(Days::new(7)))
        .take_while(move |date| *date <= last)
}
