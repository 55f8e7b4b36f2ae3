//! Google OAuth2 for gcalbar.
//!
//! Installed-app flow: print the consent URL, let the user paste the
//! authorization code back, then persist and refresh the resulting tokens
//! as a JSON file next to the config.

pub mod credentials;
pub mod error;
pub mod google;
pub mod storage;

pub use credentials::ClientCredentials;
pub use error::AuthError;
pub use google::GoogleAuth;
pub use storage::{TokenSet, TokenStore};
