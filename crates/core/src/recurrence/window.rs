use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::RecurrenceError;

/// The range of interest for an expansion, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl QueryWindow {
    /// Creates a window without validating the bounds.
    ///
    /// An inverted window is not an error here; it simply yields no
    /// occurrences.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    /// Creates a window, validating that from <= to.
    pub fn try_new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, RecurrenceError> {
        if from > to {
            return Err(RecurrenceError::InvalidWindow);
        }
        Ok(Self { from, to })
    }

    /// Creates a window covering whole days, from midnight on `from` through
    /// the last instant of `to`.
    pub fn for_dates(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: from.and_time(NaiveTime::MIN),
            to: end_of_day(to),
        }
    }

    /// Returns true if `at` falls inside the window.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.from <= at && at <= self.to
    }
}

/// The last representable instant of `date`.
pub(crate) fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999999999 is always a valid NaiveTime.
    date.and_time(NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_for_dates_covers_whole_days() {
        let window = QueryWindow::for_dates(make_date(2024, 1, 1), make_date(2024, 1, 22));

        assert_eq!(window.from, make_date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap());
        assert!(window.contains(make_date(2024, 1, 22).and_hms_opt(23, 59, 59).unwrap()));
        assert!(!window.contains(make_date(2024, 1, 23).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn test_same_day_window_is_valid() {
        let at = make_date(2024, 6, 15).and_hms_opt(9, 0, 0).unwrap();

        let window = QueryWindow::try_new(at, at).unwrap();

        assert!(window.contains(at));
    }

    #[test]
    fn test_try_new_rejects_inverted_window() {
        let from = make_date(2024, 1, 31).and_hms_opt(0, 0, 0).unwrap();
        let to = make_date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap();

        assert_eq!(
            QueryWindow::try_new(from, to),
            Err(RecurrenceError::InvalidWindow)
        );
        // The unchecked constructor accepts it.
        assert_eq!(QueryWindow::new(from, to).from, from);
    }

    #[test]
    fn test_end_of_day() {
        let end = end_of_day(make_date(2024, 2, 29));
        assert_eq!(end.date(), make_date(2024, 2, 29));
        assert_eq!(
            end.time(),
            NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap()
        );
    }
}
