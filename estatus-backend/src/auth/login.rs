//! User/password login against the backend's `/auth` endpoint.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use estatus_core::constants::AUTH_PATH;
use estatus_core::errors::BackendError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::endpoint::join_segments;
use crate::transport::Transport;

/// Token pair returned by a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Unix timestamp the access token expires at.
    #[serde(default)]
    pub expires_at: i64,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Authenticate with HTTP basic credentials and return the issued token.
pub fn login<T>(transport: &T, api_url: &Url, user: &str, password: &str) -> Result<AuthToken, BackendError>
where
    T: Transport + ?Sized,
{
    let url = join_segments(api_url, &[AUTH_PATH.trim_start_matches('/')])?;
    debug!(url = %url, "auth: logging in");

    let basic = STANDARD.encode(format!("{user}:{password}"));
    let headers = vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Authorization".to_string(), format!("Basic {basic}")),
    ];

    let response = transport.get(url.as_str(), &headers)?;
    debug!(status = response.status, "auth: request performed");
    if !response.is_success() {
        return Err(BackendError::AuthFailed {
            reason: format!("HTTP {} from {url}", response.status),
        });
    }

    let token: AuthToken =
        serde_json::from_slice(&response.body).map_err(|e| BackendError::AuthFailed {
            reason: format!("invalid token response: {e}"),
        })?;
    if token.access_token.is_empty() {
        return Err(BackendError::AuthFailed {
            reason: "token response carried no access_token".to_string(),
        });
    }

    info!(expires_at = token.expires_at, "auth: login successful");
    Ok(token)
}
