//! # estatus-backend
//!
//! Drains the cursor-paginated events endpoint of a monitoring backend.
//!
//! Single pass, no retries: any failing page aborts the whole fetch and
//! discards the pages already read. Requests go through the [`Transport`]
//! seam so the pagination protocol can be exercised without a live backend.

pub mod auth;
pub mod endpoint;
pub mod retriever;
pub mod transport;

use estatus_core::config::EstatusConfig;
use estatus_core::errors::BackendError;
use estatus_core::models::Event;

pub use auth::{AuthToken, Credentials};
pub use endpoint::{events_endpoint, parse_api_url};
pub use retriever::{decode_events, EventRetriever};
pub use transport::{HttpTransport, HttpTransportConfig, QueryParams, Transport, TransportResponse};

/// Fetch every event currently visible in the configured namespace.
///
/// Resolves the endpoint, acquires the `Authorization` value for the
/// configured credentials, then pages through the events.
pub fn fetch_namespace_events<T>(transport: &T, config: &EstatusConfig) -> Result<Vec<Event>, BackendError>
where
    T: Transport + ?Sized,
{
    let backend = &config.backend;
    let api_url = parse_api_url(backend.api_url.as_deref().unwrap_or_default())?;
    let namespace = backend.namespace.as_deref().unwrap_or_default();
    let endpoint = events_endpoint(&api_url, namespace)?;

    let credentials = Credentials::from_config(backend);
    tracing::debug!(method = credentials.method_name(), "resolving credentials");
    let authorization = credentials.authorization(transport, &api_url)?;

    EventRetriever::new(transport)
        .with_page_size(backend.page_size)
        .with_max_pages(backend.max_pages)
        .fetch_all(&endpoint, authorization.as_deref(), &config.filters)
}
