//! Tests for tracing initialization.

use std::sync::Mutex;

use estatus_core::config::ObservabilityConfig;
use estatus_core::observability::setup::{build_filter, init_tracing};

/// Serializes tests that touch `ESTATUS_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&config);
    init_tracing(&config);
}

#[test]
fn env_filter_takes_precedence() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ESTATUS_LOG", "estatus_backend=trace");
    let filter = build_filter(&ObservabilityConfig::default());
    std::env::remove_var("ESTATUS_LOG");
    assert!(filter.to_string().contains("estatus_backend=trace"));
}

#[test]
fn debug_config_used_without_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::remove_var("ESTATUS_LOG");
    let config = ObservabilityConfig {
        debug: true,
        ..Default::default()
    };
    assert_eq!(build_filter(&config).to_string(), "debug");
}

#[test]
fn spans_are_created_with_fields() {
    let span = estatus_core::rollup_span!(42usize);
    let _entered = span.enter();
    let page = estatus_core::page_span!(1u32);
    drop(page);
    assert_eq!(estatus_core::observability::spans::names::ROLLUP, "estatus.rollup");
}
