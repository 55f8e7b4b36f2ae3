//! Authentication error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No stored token at {0}")]
    TokenNotFound(PathBuf),

    #[error("Token expired and no refresh token available")]
    TokenExpired,

    #[error("Token exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Malformed credentials file: {0}")]
    MalformedCredentials(String),

    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AuthError {
    /// User-friendly message for terminal display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TokenNotFound(_) => "Not signed in. Please authenticate.",
            Self::TokenExpired => "Your session has expired. Please sign in again.",
            Self::ExchangeFailed(_) => "Sign-in failed. Please try again.",
            Self::MalformedCredentials(_) => {
                "Credentials file is unreadable. Re-download it from the Google console."
            }
            Self::Storage(_) => "Failed to save credentials. Please try again.",
            Self::Network(_) => "Network error. Check your connection.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_actionable() {
        assert!(AuthError::TokenExpired.user_message().contains("sign in"));
        assert!(AuthError::MalformedCredentials("x".into())
            .user_message()
            .contains("Re-download"));
    }
}
