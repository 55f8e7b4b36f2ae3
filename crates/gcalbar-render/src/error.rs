//! Rendering error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A timed event carried a date-time value that does not parse as a
    /// fixed-width `YYYY-MM-DDTHH:MM:SS` timestamp. Distinct from fetch
    /// errors so callers can special-case bad upstream data.
    #[error("Malformed event time: {value:?}")]
    MalformedTime { value: String },
}

impl RenderError {
    /// User-friendly message for widget display.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedTime { .. } => "An event has an unreadable time.".to_string(),
        }
    }
}
