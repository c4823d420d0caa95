//! Endpoint URLs on the backend API.

use estatus_core::errors::BackendError;
use reqwest::Url;

/// Parse the configured API URL. Must be an absolute http(s) URL.
pub fn parse_api_url(raw: &str) -> Result<Url, BackendError> {
    let url = Url::parse(raw).map_err(|e| BackendError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BackendError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// `{api_url}/api/core/v2/namespaces/{namespace}/events`.
///
/// Any path already on `api_url` is kept as a prefix; the namespace is
/// percent-encoded as a single path segment.
pub fn events_endpoint(api_url: &Url, namespace: &str) -> Result<Url, BackendError> {
    join_segments(api_url, &["api", "core", "v2", "namespaces", namespace, "events"])
}

/// Append path segments to `base`, dropping its query and fragment.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, BackendError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| BackendError::InvalidUrl {
            url: base.to_string(),
            reason: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
