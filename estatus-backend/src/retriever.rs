//! Cursor-driven pagination over the events endpoint.

use std::collections::BTreeMap;

use estatus_core::config::defaults::DEFAULT_PAGE_SIZE;
use estatus_core::constants::{CONTINUE_HEADER, CONTINUE_PARAM, LIMIT_PARAM};
use estatus_core::errors::BackendError;
use estatus_core::models::Event;
use estatus_core::{page_span, retrieval_span};
use reqwest::Url;
use tracing::{debug, info};

use crate::transport::{QueryParams, Transport};

/// Decode one page body. A JSON `null` body is an empty page.
pub fn decode_events(data: &[u8]) -> Result<Vec<Event>, serde_json::Error> {
    let events: Option<Vec<Event>> = serde_json::from_slice(data)?;
    Ok(events.unwrap_or_default())
}

/// Drains every page of the events endpoint.
///
/// Pages are requested strictly one after another: each request carries the
/// cursor returned by the previous response. With no `max_pages` cap, a
/// backend that always returns a cursor keeps the fetch running forever.
#[derive(Debug, Clone)]
pub struct EventRetriever<T> {
    transport: T,
    page_size: u32,
    max_pages: Option<u32>,
}

impl<T: Transport> EventRetriever<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fail with `PageLimitExceeded` instead of requesting more than
    /// `max_pages` pages.
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch every event behind `endpoint`.
    ///
    /// `authorization` is sent verbatim. `filters` are added to the query of
    /// every page request alongside `limit` and, after the first page,
    /// `continue`. The first failing page aborts the fetch; events from
    /// earlier pages are dropped with it.
    pub fn fetch_all(
        &self,
        endpoint: &Url,
        authorization: Option<&str>,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<Event>, BackendError> {
        let span = retrieval_span!(endpoint);
        let _entered = span.enter();

        let mut query = QueryParams::from_url(endpoint);
        query.set(LIMIT_PARAM, self.page_size.to_string());
        for (key, value) in filters {
            query.add(key.as_str(), value.as_str());
        }
        let headers = request_headers(authorization);

        let mut url = endpoint.clone();
        let mut events = Vec::new();
        let mut page: u32 = 0;

        loop {
            if let Some(limit) = self.max_pages {
                if page >= limit {
                    return Err(BackendError::PageLimitExceeded { limit });
                }
            }
            page += 1;

            let page_span = page_span!(page);
            let _page_entered = page_span.enter();

            query.apply_to(&mut url);
            let response = self.transport.get(url.as_str(), &headers)?;
            debug!(status = response.status, "request to backend performed");
            if !response.is_success() {
                return Err(BackendError::Status {
                    status: response.status,
                    url: url.to_string(),
                });
            }

            let batch = decode_events(&response.body).map_err(|e| BackendError::Decode {
                page,
                reason: e.to_string(),
            })?;
            debug!(bytes = response.body.len(), events = batch.len(), "page decoded");
            events.extend(batch);

            match response.header(CONTINUE_HEADER).filter(|c| !c.is_empty()) {
                Some(cursor) => query.set(CONTINUE_PARAM, cursor),
                None => break,
            }
        }

        info!(pages = page, events = events.len(), "retrieval complete");
        Ok(events)
    }
}

fn request_headers(authorization: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    if let Some(value) = authorization {
        headers.push(("Authorization".to_string(), value.to_string()));
    }
    headers
}
