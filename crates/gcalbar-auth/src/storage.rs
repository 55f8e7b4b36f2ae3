//! Token persistence.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::google::TokenResponse;

/// Token set for OAuth2 authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    /// Access token for API requests.
    pub access_token: String,

    /// Optional refresh token for token renewal.
    pub refresh_token: Option<String>,

    /// Token expiration timestamp (Unix timestamp).
    pub expires_at: i64,

    /// Scopes granted to this token.
    pub scopes: Vec<String>,
}

impl TokenSet {
    /// Build a token set from a token-endpoint response.
    ///
    /// Refresh responses omit the refresh token, so the previously stored one
    /// is carried over via `fallback_refresh`.
    pub fn from_response(response: TokenResponse, fallback_refresh: Option<String>) -> Self {
        let expires_at = chrono::Utc::now().timestamp() + response.expires_in as i64;
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token.or(fallback_refresh),
            expires_at,
            scopes: response
                .scope
                .map(|s| s.split(' ').map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    /// Check if the token needs refresh (within 5 minutes of expiry).
    pub fn needs_refresh(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        now >= self.expires_at - 300
    }

    /// Check if the token is expired.
    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp();
        now >= self.expires_at
    }
}

/// File-based token storage at an explicit path supplied by the caller,
/// rather than a path derived from the environment at call time.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist a token set as pretty-printed JSON.
    ///
    /// # Errors
    /// `AuthError::Storage` on filesystem failures.
    pub fn store(&self, token_set: &TokenSet) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(token_set)
            .map_err(|e| AuthError::ExchangeFailed(format!("serialize token: {e}")))?;
        fs::write(&self.path, json)?;

        tracing::info!("Stored token at {:?}", self.path);
        Ok(())
    }

    /// Load the stored token set.
    ///
    /// # Errors
    /// `AuthError::TokenNotFound` if no token has been stored yet,
    /// `AuthError::Storage` on other filesystem failures.
    pub fn load(&self) -> Result<TokenSet, AuthError> {
        if !self.path.exists() {
            return Err(AuthError::TokenNotFound(self.path.clone()));
        }

        let json = fs::read_to_string(&self.path)?;
        let token_set: TokenSet = serde_json::from_str(&json)
            .map_err(|_| AuthError::TokenNotFound(self.path.clone()))?;

        Ok(token_set)
    }

    /// Delete the stored token, if any.
    ///
    /// # Errors
    /// `AuthError::Storage` on filesystem failures.
    pub fn delete(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::info!("Deleted token at {:?}", self.path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn token(expires_at: i64) -> TokenSet {
        TokenSet {
            access_token: "test".to_string(),
            refresh_token: None,
            expires_at,
            scopes: vec![],
        }
    }

    #[test]
    fn test_token_expiry() {
        let now = chrono::Utc::now().timestamp();

        let expired = token(now - 3600);
        assert!(expired.is_expired());
        assert!(expired.needs_refresh());

        let valid = token(now + 3600);
        assert!(!valid.is_expired());
        assert!(!valid.needs_refresh());

        let soon = token(now + 200);
        assert!(!soon.is_expired());
        assert!(soon.needs_refresh());
    }

    #[test]
    fn test_from_response_carries_over_refresh_token() {
        let response = TokenResponse {
            access_token: "fresh".to_string(),
            refresh_token: None,
            expires_in: 3600,
            token_type: "Bearer".to_string(),
            scope: Some("a b".to_string()),
        };
        let set = TokenSet::from_response(response, Some("kept".to_string()));

        assert_eq!(set.access_token, "fresh");
        assert_eq!(set.refresh_token, Some("kept".to_string()));
        assert_eq!(set.scopes, vec!["a".to_string(), "b".to_string()]);
        assert!(!set.needs_refresh());
    }

    #[test]
    fn test_store_load_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("tokens").join("token.json"));

        assert!(matches!(store.load(), Err(AuthError::TokenNotFound(_))));

        let now = chrono::Utc::now().timestamp();
        let mut set = token(now + 3600);
        set.refresh_token = Some("refresh".to_string());
        store.store(&set).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.access_token, "test");
        assert_eq!(loaded.refresh_token, Some("refresh".to_string()));

        store.delete().unwrap();
        assert!(matches!(store.load(), Err(AuthError::TokenNotFound(_))));
        // Deleting twice is a no-op.
        store.delete().unwrap();
    }
}
