//! OAuth client credentials, as downloaded from the Google console.

use std::path::Path;

use serde::Deserialize;

use crate::error::AuthError;

/// OAuth2 client id/secret pair.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Shape of Google's downloaded `credentials.json`. Installed-app clients
/// nest under `"installed"`, web clients under `"web"`.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    installed: Option<ClientCredentials>,
    web: Option<ClientCredentials>,
}

impl ClientCredentials {
    /// Load credentials from a `credentials.json` file.
    ///
    /// # Errors
    /// `AuthError::Storage` if the file cannot be read,
    /// `AuthError::MalformedCredentials` if it holds no client entry.
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn from_json(contents: &str) -> Result<Self, AuthError> {
        let file: CredentialsFile = serde_json::from_str(contents)
            .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;

        file.installed.or(file.web).ok_or_else(|| {
            AuthError::MalformedCredentials(
                "expected an \"installed\" or \"web\" client entry".to_string(),
            )
        })
    }
}
