//! Top-level error type for the gcalbar binary.
//!
//! Collaborator failures converge here so the caller can decide whether to
//! retry, degrade to a grid-only widget, or terminate - instead of the
//! process aborting inside a collaborator.

use thiserror::Error;

use gcalbar_auth::AuthError;
use gcalbar_gcal::CalendarError;
use gcalbar_render::RenderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for terminal display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Auth(e) => e.user_message().to_string(),
            AppError::Calendar(e) => e.user_message(),
            AppError::Render(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.".to_string(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}
