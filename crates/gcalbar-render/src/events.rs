//! Grouped agenda list.
//!
//! Turns the fetched event records into the right-hand panel: one label line
//! per calendar day followed by one or two lines per event. Records are never
//! reordered, only partitioned at date boundaries.

use chrono::{Duration, NaiveDate};

use crate::error::RenderError;
use crate::highlight::highlight;
use crate::types::EventRecord;

/// Fixed 11-column tag shown where a timed event shows `HH:MM-HH:MM`.
const ALL_DAY_TAG: &str = "  all-day  ";

/// Format `records` into agenda lines, grouped by day relative to `reference`.
///
/// Records are assumed chronologically pre-sorted by the data source; the
/// formatter only walks them once. Output lines carry conky color markers but
/// no `#` escaping - that is the compositor's job.
///
/// # Errors
/// `RenderError::MalformedTime` if a timed record carries an unparseable
/// date-time value.
pub fn format_events(
    records: &[EventRecord],
    reference: NaiveDate,
    accent: u8,
) -> Result<Vec<String>, RenderError> {
    if records.is_empty() {
        return Ok(vec!["No upcoming events found.".to_string()]);
    }

    let mut lines = Vec::with_capacity(records.len() * 2);
    let mut last_date: Option<NaiveDate> = None;

    for record in records {
        let date = record.start.date()?;
        if last_date != Some(date) {
            lines.push(day_label(date, reference));
            last_date = Some(date);
        }

        lines.push(format!(
            "{} [{}] {}",
            highlight(accent, &time_range(record)?),
            status_tag(&record.status),
            record.summary,
        ));

        if let Some(location) = record.location.as_deref() {
            if !location.is_empty() {
                lines.push(format!("            @{location}"));
            }
        }
    }
    Ok(lines)
}

/// `Today, …` / `Tomorrow, …` / `<Weekday>, …` with the ISO date.
fn day_label(date: NaiveDate, reference: NaiveDate) -> String {
    let iso = date.format("%Y-%m-%d");
    if date == reference {
        format!("Today, {iso}")
    } else if date == reference + Duration::days(1) {
        format!("Tomorrow, {iso}")
    } else {
        format!("{}, {}", date.format("%A"), iso)
    }
}

/// `HH:MM-HH:MM` for timed events, the all-day tag otherwise.
///
/// An event with a date-only boundary on either side is treated as all-day;
/// the data source never mixes the two within one event.
fn time_range(record: &EventRecord) -> Result<String, RenderError> {
    match (record.start.clock_time()?, record.end.clock_time()?) {
        (Some(start), Some(end)) => Ok(format!(
            "{}-{}",
            start.format("%H:%M"),
            end.format("%H:%M")
        )),
        _ => Ok(ALL_DAY_TAG.to_string()),
    }
}

/// First 3 characters of the status string (`confirmed` -> `con`).
fn status_tag(status: &str) -> String {
    status.chars().take(3).collect()
}
