//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// `ESTATUS_LOG` wins when set to a valid filter, e.g.
/// `ESTATUS_LOG=estatus_backend=debug,estatus_rollup=info`. Otherwise the
/// directive comes from `config` (`debug` when the debug switch is on).
///
/// Output goes to stderr so rendered reports on stdout stay parseable.
/// Idempotent, and a no-op if another subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Resolve the filter `init_tracing` would install.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()))
}
