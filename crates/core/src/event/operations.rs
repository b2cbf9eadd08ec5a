use super::error::EventError;
use super::types::Event;

/// Validates an event before it is handed to a recurrence strategy.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.end_date < event.start_date {
        return Err(EventError::InvalidDateRange);
    }
    if let Some(until) = event.recurrence_until {
        if until < event.start_date.date() {
            return Err(EventError::UntilBeforeStart);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_date_time(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn standup() -> Event {
        Event::new(
            "Standup",
            make_date_time(2024, 1, 1, 9),
            make_date_time(2024, 1, 1, 10),
        )
    }

    #[test]
    fn test_validate_event_success() {
        assert!(validate_event(&standup()).is_ok());
        assert!(validate_event(
            &standup()
                .with_recurrence("weekly")
                .with_recurrence_until(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        )
        .is_ok());
    }

    #[test]
    fn test_validate_event_empty_title() {
        let mut event = standup();
        event.title = "   ".to_string();
        assert_eq!(validate_event(&event), Err(EventError::EmptyTitle));
    }

    #[test]
    fn test_validate_event_invalid_date_range() {
        let event = Event::new(
            "Backwards",
            make_date_time(2024, 1, 1, 10),
            make_date_time(2024, 1, 1, 9),
        );
        assert_eq!(validate_event(&event), Err(EventError::InvalidDateRange));
    }

    #[test]
    fn test_validate_event_until_before_start() {
        let event = standup()
            .with_recurrence("weekly")
            .with_recurrence_until(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(validate_event(&event), Err(EventError::UntilBeforeStart));
    }
}
