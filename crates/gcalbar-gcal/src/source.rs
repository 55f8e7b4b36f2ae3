//! Injected fetch capability.

use chrono::{DateTime, Utc};
use gcalbar_render::EventRecord;

use crate::error::CalendarError;

/// Anything that can list upcoming events.
///
/// The widget binary is generic over this trait so rendering can be exercised
/// without network access; [`crate::CalendarClient`] is the production
/// implementation.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    /// List up to `max_results` events starting at or after `time_min`,
    /// ordered by start time.
    ///
    /// # Errors
    /// Returns a [`CalendarError`] when the source cannot be reached or
    /// serves unusable data.
    async fn upcoming_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        max_results: usize,
    ) -> Result<Vec<EventRecord>, CalendarError>;
}
