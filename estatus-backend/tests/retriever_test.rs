//! Pagination protocol tests against scripted transports.

mod common;

use std::collections::BTreeMap;

use common::*;
use estatus_backend::{decode_events, EventRetriever};
use estatus_core::errors::BackendError;
use reqwest::Url;

fn endpoint() -> Url {
    Url::parse("http://sensu.local:8080/api/core/v2/namespaces/default/events").unwrap()
}

fn no_filters() -> BTreeMap<String, String> {
    BTreeMap::new()
}

// ─── Page draining ─────────────────────────────────────────

#[test]
fn two_pages_are_concatenated_and_cursor_forwarded_verbatim() {
    let cursor = "eyJrZXkiOiIvc2Vuc3UuaW8vZXZlbnRzL2RlZmF1bHQvd2ViLTAxIn0=";
    let transport = ScriptedTransport::new()
        .push(page(&events_json("web-01", 200, 0), Some(cursor)))
        .push(page(&events_json("web-02", 10, 2), Some("")));

    let events = EventRetriever::new(&transport)
        .fetch_all(&endpoint(), Some("Bearer tok"), &no_filters())
        .unwrap();

    assert_eq!(events.len(), 210);
    assert_eq!(transport.request_count(), 2);

    let first = transport.request(0);
    assert_eq!(first.query_value("limit").as_deref(), Some("200"));
    assert_eq!(first.query_value("continue"), None);

    let second = transport.request(1);
    assert_eq!(second.query_value("continue").as_deref(), Some(cursor));
    assert_eq!(second.query_value("limit").as_deref(), Some("200"));
}

#[test]
fn missing_cursor_header_ends_pagination() {
    let transport = ScriptedTransport::new().push(page(&events_json("db-01", 3, 1), None));

    let events = EventRetriever::new(&transport)
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap();

    assert_eq!(events.len(), 3);
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn empty_result_is_success() {
    let transport = ScriptedTransport::new().push(page("[]", None));

    let events = EventRetriever::new(&transport)
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap();

    assert!(events.is_empty());
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn null_body_is_an_empty_page() {
    assert!(decode_events(b"null").unwrap().is_empty());
}

#[test]
fn custom_page_size_is_sent_as_limit() {
    let transport = ScriptedTransport::new().push(page("[]", None));
    EventRetriever::new(&transport)
        .with_page_size(25)
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap();
    assert_eq!(transport.request(0).query_value("limit").as_deref(), Some("25"));
}

// ─── Headers and filters ──────────────────────────────────

#[test]
fn authorization_is_passed_through_on_every_page() {
    let transport = ScriptedTransport::new()
        .push(page(&events_json("a", 1, 0), Some("next")))
        .push(page(&events_json("a", 1, 0), None));

    EventRetriever::new(&transport)
        .fetch_all(&endpoint(), Some("Key 0a1b2c"), &no_filters())
        .unwrap();

    for i in 0..2 {
        let request = transport.request(i);
        assert_eq!(request.header("Authorization"), Some("Key 0a1b2c"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }
}

#[test]
fn no_authorization_header_without_credentials() {
    let transport = ScriptedTransport::new().push(page("[]", None));
    EventRetriever::new(&transport)
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap();
    assert_eq!(transport.request(0).header("Authorization"), None);
}

#[test]
fn filters_are_merged_into_every_page_with_spaces_as_percent_20() {
    let transport = ScriptedTransport::new()
        .push(page(&events_json("a", 1, 0), Some("c1")))
        .push(page(&events_json("a", 1, 0), None));

    let mut filters = BTreeMap::new();
    filters.insert("fieldSelector".to_string(), "check.name == check-disk".to_string());

    EventRetriever::new(&transport)
        .fetch_all(&endpoint(), None, &filters)
        .unwrap();

    for i in 0..2 {
        let request = transport.request(i);
        assert!(
            request.url.contains("fieldSelector=check.name%20%3D%3D%20check-disk"),
            "unexpected url {}",
            request.url
        );
        assert!(!request.url.contains('+'));
        assert_eq!(
            request.query_value("fieldSelector").as_deref(),
            Some("check.name == check-disk")
        );
    }
}

// ─── Failures ─────────────────────────────────────────────

#[test]
fn http_500_on_second_page_discards_first_page() {
    let transport = ScriptedTransport::new()
        .push(page(&events_json("web-01", 200, 0), Some("next")))
        .push(status(500));

    let result = EventRetriever::new(&transport).fetch_all(&endpoint(), None, &no_filters());

    match result {
        Err(BackendError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.contains("continue=next"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn non_2xx_first_page_fails_immediately() {
    let transport = ScriptedTransport::new().push(status(401));
    let err = EventRetriever::new(&transport)
        .fetch_all(&endpoint(), Some("Bearer expired"), &no_filters())
        .unwrap_err();
    assert!(matches!(err, BackendError::Status { status: 401, .. }));
}

#[test]
fn malformed_body_is_a_decode_error_naming_the_page() {
    let transport = ScriptedTransport::new()
        .push(page(&events_json("a", 2, 0), Some("next")))
        .push(page("{\"not\": \"a list\"}", None));

    let err = EventRetriever::new(&transport)
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap_err();
    assert!(matches!(err, BackendError::Decode { page: 2, .. }));
}

#[test]
fn transport_errors_propagate_without_retry() {
    let transport = ScriptedTransport::new().push_err(BackendError::Transport {
        url: endpoint().to_string(),
        reason: "connection refused".into(),
    });

    let err = EventRetriever::new(&transport)
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap_err();
    assert!(matches!(err, BackendError::Transport { .. }));
    assert_eq!(transport.request_count(), 1);
}

// ─── Non-terminating cursors ──────────────────────────────

/// Without a cap the retriever follows the cursor for as long as the backend
/// returns one; only the test transport's own budget ends this run.
#[test]
fn endless_cursor_is_followed_until_something_else_stops_it() {
    let transport = EndlessTransport::new(500);

    let err = EventRetriever::new(&transport)
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap_err();

    assert_eq!(transport.calls.get(), 500);
    assert!(matches!(err, BackendError::Transport { ref reason, .. } if reason.contains("budget")));
}

#[test]
fn max_pages_cap_stops_an_endless_cursor() {
    let transport = EndlessTransport::new(500);

    let err = EventRetriever::new(&transport)
        .with_max_pages(Some(5))
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap_err();

    assert_eq!(transport.calls.get(), 5);
    assert!(matches!(err, BackendError::PageLimitExceeded { limit: 5 }));
}

#[test]
fn max_pages_cap_does_not_affect_terminating_backends() {
    let transport = ScriptedTransport::new()
        .push(page(&events_json("a", 2, 0), Some("c1")))
        .push(page(&events_json("a", 2, 0), None));

    let events = EventRetriever::new(&transport)
        .with_max_pages(Some(2))
        .fetch_all(&endpoint(), None, &no_filters())
        .unwrap();
    assert_eq!(events.len(), 4);
}
