//! Google OAuth2 provider for read-only Calendar access.

use serde::{Deserialize, Serialize};

use crate::credentials::ClientCredentials;
use crate::error::AuthError;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const CALENDAR_RO_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

// Installed-app redirect: Google shows the code for the user to paste back.
const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub token_type: String,
    pub scope: Option<String>,
}

pub struct GoogleAuth {
    client_id: String,
    client_secret: String,
    token_url: String,
}

impl GoogleAuth {
    pub fn new(credentials: ClientCredentials) -> Self {
        Self {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            token_url: GOOGLE_TOKEN_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn new_with_token_url(credentials: ClientCredentials, token_url: &str) -> Self {
        Self {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            token_url: token_url.to_string(),
        }
    }

    /// Generate the consent URL for the paste-the-code flow.
    /// Returns (url, state); the state ties a pasted code to this attempt.
    pub fn authorization_url(&self) -> (String, String) {
        let state = uuid::Uuid::new_v4().to_string();

        let url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}&access_type=offline&prompt=consent",
            GOOGLE_AUTH_URL,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(OOB_REDIRECT_URI),
            urlencoding::encode(CALENDAR_RO_SCOPE),
            urlencoding::encode(&state),
        );

        (url, state)
    }

    /// Exchange a pasted authorization code for tokens.
    ///
    /// # Errors
    /// `AuthError::Network` on transport failures, `AuthError::ExchangeFailed`
    /// when Google rejects the code.
    #[tracing::instrument(skip(self, code), level = "info")]
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthError> {
        let client = reqwest::Client::new();

        let response = client
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", OOB_REDIRECT_URI),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuthError::ExchangeFailed(error_text));
        }

        Ok(response.json::<TokenResponse>().await?)
    }

    /// Refresh an expired access token.
    ///
    /// # Errors
    /// `AuthError::Network` on transport failures, `AuthError::ExchangeFailed`
    /// when Google rejects the refresh token.
    #[tracing::instrument(skip(self, refresh_token), level = "info")]
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, AuthError> {
        let client = reqwest::Client::new();

        let response = client
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuthError::ExchangeFailed(error_text));
        }

        Ok(response.json::<TokenResponse>().await?)
    }
}
