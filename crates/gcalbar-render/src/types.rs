//! Event records as seen by the formatter.
//!
//! These mirror what the calendar data source hands over: start and end are
//! either a raw fixed-width date-time string or a date-only value. The raw
//! string is kept verbatim so time extraction happens exactly once, at the
//! formatting boundary, with an explicit error path.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// A single upcoming appointment, chronologically pre-sorted upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub summary: String,
    pub status: String,
    pub location: Option<String>,
    pub start: EventWhen,
    pub end: EventWhen,
}

/// Event boundary - a specific wall-clock instant or an all-day date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventWhen {
    /// Raw date-time string as supplied by the data source,
    /// `YYYY-MM-DDTHH:MM:SS` optionally followed by a zone offset.
    Timed(String),
    /// Date-only value for all-day events.
    AllDay(NaiveDate),
}

impl EventWhen {
    /// Calendar date of this boundary.
    ///
    /// # Errors
    /// `RenderError::MalformedTime` if a timed value does not parse.
    pub fn date(&self) -> Result<NaiveDate, RenderError> {
        match self {
            Self::Timed(raw) => Ok(wall_clock(raw)?.date()),
            Self::AllDay(date) => Ok(*date),
        }
    }

    /// Wall-clock time of a timed boundary, `None` for all-day.
    ///
    /// # Errors
    /// `RenderError::MalformedTime` if a timed value does not parse.
    pub fn clock_time(&self) -> Result<Option<NaiveDateTime>, RenderError> {
        match self {
            Self::Timed(raw) => Ok(Some(wall_clock(raw)?)),
            Self::AllDay(_) => Ok(None),
        }
    }
}

/// Parse a raw date-time value into the wall-clock time it spells out.
///
/// Offsets are kept as-is rather than converted: the data source already
/// serves times in the calendar's zone and the widget displays them verbatim.
fn wall_clock(raw: &str) -> Result<NaiveDateTime, RenderError> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map_err(|_| {
        RenderError::MalformedTime {
            value: raw.to_string(),
        }
    })
}
