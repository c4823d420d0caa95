//! reqwest-backed transport.

use std::time::Duration;

use estatus_core::constants::CONTINUE_HEADER;
use estatus_core::errors::BackendError;

use super::{Transport, TransportResponse};

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransportConfig {
    /// Per-request timeout. `None` lets a request block indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpTransportConfig {
    pub fn from_timeout_secs(timeout_secs: Option<u64>) -> Self {
        Self {
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Blocking reqwest client. One instance serves every page of a run.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &HttpTransportConfig) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(concat!("entities-status/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Transport {
                url: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<TransportResponse, BackendError> {
        let transport_err = |e: reqwest::Error| BackendError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().map_err(transport_err)?;
        let status = response.status().as_u16();
        let mut headers = Vec::with_capacity(response.headers().len());
        for (name, value) in response.headers() {
            let value = match value.to_str() {
                Ok(v) => v.to_string(),
                // A cursor that cannot be read must not look like the last page.
                Err(_) if name.as_str().eq_ignore_ascii_case(CONTINUE_HEADER) => {
                    return Err(BackendError::Transport {
                        url: url.to_string(),
                        reason: format!("unreadable {CONTINUE_HEADER} header value"),
                    });
                }
                Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
            };
            headers.push((name.as_str().to_string(), value));
        }
        let body = response.bytes().map_err(transport_err)?.to_vec();

        tracing::trace!(status, bytes = body.len(), "http: response received");
        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
