//! Shared test transports and event builders.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use estatus_backend::{Transport, TransportResponse};
use estatus_core::errors::BackendError;

/// A request as seen by a test transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decoded query pairs of the request URL.
    pub fn query(&self) -> Vec<(String, String)> {
        reqwest::Url::parse(&self.url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query().into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Replays a fixed script of responses, recording every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<TransportResponse, BackendError>>>,
    pub requests: RefCell<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(self, response: TransportResponse) -> Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn push_err(self, error: BackendError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn request(&self, index: usize) -> RecordedRequest {
        self.requests.borrow()[index].clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<TransportResponse, BackendError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.to_vec(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request #{} to {url}", self.request_count()))
    }
}

/// Always answers with one event and a cursor, until its call budget runs
/// out. Stands in for a backend whose pagination never terminates.
pub struct EndlessTransport {
    pub calls: Cell<u32>,
    pub budget: u32,
}

impl EndlessTransport {
    pub fn new(budget: u32) -> Self {
        Self {
            calls: Cell::new(0),
            budget,
        }
    }
}

impl Transport for EndlessTransport {
    fn get(&self, url: &str, _headers: &[(String, String)]) -> Result<TransportResponse, BackendError> {
        if self.calls.get() >= self.budget {
            return Err(BackendError::Transport {
                url: url.to_string(),
                reason: "test call budget exhausted".to_string(),
            });
        }
        self.calls.set(self.calls.get() + 1);
        Ok(page(&events_json("loop", 1, 0), Some(&format!("cursor-{}", self.calls.get()))))
    }
}

/// `count` events for entity `entity`, all with status `status`, as JSON.
pub fn events_json(entity: &str, count: usize, status: i64) -> String {
    let events: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "entity": {"metadata": {"name": entity, "namespace": "default"}},
                "check": {"metadata": {"name": format!("check-{i}")}, "status": status}
            })
        })
        .collect();
    serde_json::Value::Array(events).to_string()
}

/// A 200 response with `body` and an optional cursor header.
pub fn page(body: &str, cursor: Option<&str>) -> TransportResponse {
    let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
    if let Some(cursor) = cursor {
        headers.push(("sensu-continue".to_string(), cursor.to_string()));
    }
    TransportResponse {
        status: 200,
        headers,
        body: body.as_bytes().to_vec(),
    }
}

pub fn status(code: u16) -> TransportResponse {
    TransportResponse {
        status: code,
        headers: Vec::new(),
        body: b"{\"message\":\"internal error\"}".to_vec(),
    }
}
