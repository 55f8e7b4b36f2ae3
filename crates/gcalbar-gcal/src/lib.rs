//! Google Calendar integration for gcalbar.
//!
//! Read-only API client plus the wire types it deserializes. Events leave
//! this crate as [`gcalbar_render::EventRecord`] values ready for formatting.

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::CalendarClient;
pub use error::CalendarError;
pub use source::EventSource;
pub use types::{ApiEvent, ApiEventTime, EventListResponse};
