use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accessors the recurrence strategies need from an event record.
///
/// Strategies never touch storage; they read these fields, clone the record
/// and rewrite the clone into a concrete occurrence.
pub trait RecurringEvent: Clone {
    fn start_date(&self) -> NaiveDateTime;

    fn end_date(&self) -> NaiveDateTime;

    /// Length of a single occurrence.
    fn duration(&self) -> Duration {
        self.end_date() - self.start_date()
    }

    /// Label of the strategy that expands this event, if it recurs at all.
    fn recurrence_type(&self) -> Option<&str>;

    /// Last day (inclusive) on which the series may produce an occurrence.
    fn recurrence_until(&self) -> Option<NaiveDate>;

    fn set_start_date(&mut self, start: NaiveDateTime);

    fn set_end_date(&mut self, end: NaiveDateTime);

    /// Marks the record as a materialized, non-recurring instance.
    fn clear_recurrence_type(&mut self);
}

/// A calendar event, either a one-off or the definition of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub location: Option<String>,
    #[serde(
        serialize_with = "crate::serde::serialize_date_time",
        deserialize_with = "crate::serde::deserialize_date_time"
    )]
    pub start_date: NaiveDateTime,
    #[serde(
        serialize_with = "crate::serde::serialize_date_time",
        deserialize_with = "crate::serde::deserialize_date_time"
    )]
    pub end_date: NaiveDateTime,
    /// Strategy label such as `"weekly"`. `None` for one-off events and
    /// for occurrences produced by a strategy.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub recurrence_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_date"
    )]
    pub recurrence_until: Option<NaiveDate>,
}

impl Event {
    /// Creates a new one-off event.
    pub fn new(title: impl Into<String>, start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            location: None,
            start_date,
            end_date,
            recurrence_type: None,
            recurrence_until: None,
        }
    }

    /// Sets the recurrence label for this event.
    pub fn with_recurrence(mut self, label: impl Into<String>) -> Self {
        self.recurrence_type = Some(label.into());
        self
    }

    /// Sets the last day of the series.
    pub fn with_recurrence_until(mut self, until: NaiveDate) -> Self {
        self.recurrence_until = Some(until);
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns true if this event defines a series.
    pub fn is_recurring(&self) -> bool {
        self.recurrence_type.is_some()
    }
}

impl RecurringEvent for Event {
    fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    fn recurrence_type(&self) -> Option<&str> {
        self.recurrence_type.as_deref()
    }

    fn recurrence_until(&self) -> Option<NaiveDate> {
        self.recurrence_until
    }

    fn set_start_date(&mut self, start: NaiveDateTime) {
        self.start_date = start;
    }

    fn set_end_date(&mut self, end: NaiveDateTime) {
        self.end_date = end;
    }

    fn clear_recurrence_type(&mut self) {
        self.recurrence_type = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_event_builder() {
        let start = make_date_time(2024, 1, 1, 9, 0);
        let end = make_date_time(2024, 1, 1, 10, 0);
        let until = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let event = Event::new("Standup", start, end)
            .with_recurrence("weekly")
            .with_recurrence_until(until)
            .with_description("Team sync")
            .with_location("Room 4");

        assert_eq!(event.title, "Standup");
        assert_eq!(event.recurrence_type, Some("weekly".to_string()));
        assert_eq!(event.recurrence_until, Some(until));
        assert_eq!(event.description, Some("Team sync".to_string()));
        assert_eq!(event.location, Some("Room 4".to_string()));
        assert!(event.is_recurring());
    }

    #[test]
    fn test_recurring_event_accessors() {
        let start = make_date_time(2024, 1, 1, 9, 0);
        let end = make_date_time(2024, 1, 1, 10, 30);
        let mut event = Event::new("Review", start, end).with_recurrence("weekly");

        assert_eq!(RecurringEvent::duration(&event), Duration::minutes(90));
        assert_eq!(RecurringEvent::recurrence_type(&event), Some("weekly"));

        let new_start = make_date_time(2024, 1, 8, 9, 0);
        event.set_start_date(new_start);
        event.set_end_date(new_start + Duration::minutes(90));
        event.clear_recurrence_type();

        assert_eq!(event.start_date, new_start);
        assert_eq!(event.end_date, make_date_time(2024, 1, 8, 10, 30));
        assert!(!event.is_recurring());
    }

    #[test]
    fn test_event_deserialize() {
        let json = r#"{
            "title": "Standup",
            "start_date": "2024-01-01 09:00:00",
            "end_date": "2024-01-01T10:00",
            "recurrence_type": "weekly",
            "recurrence_until": "2024-01-10"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.start_date, make_date_time(2024, 1, 1, 9, 0));
        assert_eq!(event.end_date, make_date_time(2024, 1, 1, 10, 0));
        assert_eq!(event.recurrence_type.as_deref(), Some("weekly"));
        assert_eq!(
            event.recurrence_until,
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_event_deserialize_empty_recurrence_is_none() {
        let json = r#"{
            "title": "Dentist",
            "start_date": "2024-01-01 09:00",
            "end_date": "2024-01-01 10:00",
            "recurrence_type": "",
            "recurrence_until": ""
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert!(!event.is_recurring());
        assert_eq!(event.recurrence_until, None);
    }

    #[test]
    fn test_event_deserialize_rejects_bad_date() {
        let json = r#"{
            "title": "Broken",
            "start_date": "yesterday",
            "end_date": "2024-01-01 10:00"
        }"#;
        let result: Result<Event, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_event_serialize_skips_empty_fields() {
        let id = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let event = Event::new(
            "Standup",
            make_date_time(2024, 1, 8, 9, 0),
            make_date_time(2024, 1, 8, 10, 0),
        )
        .with_id(id);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["start_date"], "2024-01-08 09:00:00");
        assert_eq!(json["end_date"], "2024-01-08 10:00:00");
        assert!(json.get("recurrence_type").is_none());
        assert!(json.get("recurrence_until").is_none());
        assert!(json.get("description").is_none());
    }
}
