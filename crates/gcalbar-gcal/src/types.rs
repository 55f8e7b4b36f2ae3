//! Calendar API wire types.

use chrono::NaiveDate;
use gcalbar_render::{EventRecord, EventWhen};
use serde::Deserialize;

use crate::error::CalendarError;

/// Google Calendar API event response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    pub id: String,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub start: Option<ApiEventTime>,
    pub end: Option<ApiEventTime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEventTime {
    pub date_time: Option<String>,
    pub date: Option<String>,
    pub time_zone: Option<String>,
}

/// API response for event list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    #[serde(default)]
    pub items: Vec<ApiEvent>,
    pub next_page_token: Option<String>,
}

impl ApiEvent {
    /// Convert the API response into a record for the formatter.
    ///
    /// The raw `dateTime` string travels through untouched - time extraction
    /// happens at the rendering boundary where a malformed value surfaces as
    /// a distinct error instead of a truncation.
    ///
    /// # Errors
    /// `CalendarError::InvalidEventData` if the event has no usable start.
    pub fn into_record(self) -> Result<EventRecord, CalendarError> {
        let start = parse_event_time(self.start.as_ref())
            .ok_or_else(|| CalendarError::InvalidEventData(format!("event {} has no start", self.id)))?;
        // Events without an end (cancelled ghosts) reuse the start boundary.
        let end = parse_event_time(self.end.as_ref()).unwrap_or_else(|| start.clone());

        Ok(EventRecord {
            summary: self.summary.unwrap_or_default(),
            status: self.status.unwrap_or_else(|| "confirmed".to_string()),
            location: self.location.filter(|l| !l.is_empty()),
            start,
            end,
        })
    }
}

fn parse_event_time(api: Option<&ApiEventTime>) -> Option<EventWhen> {
    let api = api?;
    if let Some(dt) = &api.date_time {
        return Some(EventWhen::Timed(dt.clone()));
    }
    let date = NaiveDate::parse_from_str(api.date.as_deref()?, "%Y-%m-%d").ok()?;
    Some(EventWhen::AllDay(date))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_timed_event_keeps_raw_datetime() {
        let json = r#"{
            "id": "event123",
            "summary": "Team Meeting",
            "location": "Conference Room A",
            "start": {"dateTime": "2026-08-24T10:00:00+02:00"},
            "end": {"dateTime": "2026-08-24T11:00:00+02:00"},
            "status": "confirmed"
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let record = api_event.into_record().unwrap();

        assert_eq!(record.summary, "Team Meeting");
        assert_eq!(record.location, Some("Conference Room A".to_string()));
        assert!(
            matches!(record.start, EventWhen::Timed(ref raw) if raw == "2026-08-24T10:00:00+02:00")
        );
    }

    #[test]
    fn test_all_day_event() {
        let json = r#"{
            "id": "event456",
            "summary": "Holiday",
            "start": {"date": "2026-08-24"},
            "end": {"date": "2026-08-25"}
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let record = api_event.into_record().unwrap();

        assert!(matches!(record.start, EventWhen::AllDay(_)));
        assert_eq!(record.status, "confirmed");
    }

    #[test]
    fn test_event_without_start_is_invalid() {
        let json = r#"{"id": "ghost"}"#;
        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let err = api_event.into_record().unwrap_err();

        assert!(matches!(err, CalendarError::InvalidEventData(_)));
    }

    #[test]
    fn test_missing_end_reuses_start() {
        let json = r#"{
            "id": "event789",
            "summary": "Ping",
            "start": {"dateTime": "2026-08-24T10:00:00Z"}
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let record = api_event.into_record().unwrap();

        assert!(matches!(record.end, EventWhen::Timed(ref raw) if raw == "2026-08-24T10:00:00Z"));
    }

    #[test]
    fn test_empty_location_is_dropped() {
        let json = r#"{
            "id": "event1",
            "summary": "Standup",
            "location": "",
            "start": {"dateTime": "2026-08-24T09:00:00Z"},
            "end": {"dateTime": "2026-08-24T09:15:00Z"}
        }"#;

        let api_event: ApiEvent = serde_json::from_str(json).unwrap();
        let record = api_event.into_record().unwrap();

        assert_eq!(record.location, None);
    }
}
