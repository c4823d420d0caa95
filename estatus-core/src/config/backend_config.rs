use serde::{Deserialize, Serialize};

use super::defaults;

/// Connection settings for the monitoring backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base API URL, e.g. `https://sensu.example.com:8080`.
    pub api_url: Option<String>,
    /// Namespace whose events are summarised.
    pub namespace: Option<String>,
    /// Bearer access token.
    pub access_token: Option<String>,
    /// API key, sent as `Authorization: Key <key>`.
    pub api_key: Option<String>,
    /// Login user, exchanged for a bearer token before fetching.
    pub user: Option<String>,
    pub password: Option<String>,
    /// Events requested per page.
    pub page_size: u32,
    /// Abort once this many pages were fetched and the backend still
    /// returns a cursor. `None` follows the cursor indefinitely.
    pub max_pages: Option<u32>,
    /// Per-request timeout. `None` means requests never time out.
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            namespace: None,
            access_token: None,
            api_key: None,
            user: None,
            password: None,
            page_size: defaults::DEFAULT_PAGE_SIZE,
            max_pages: None,
            timeout_secs: None,
        }
    }
}
