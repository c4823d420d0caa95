//! Fetch, roll up, render.

use std::io::Write;
use std::path::Path;

use estatus_backend::{fetch_namespace_events, HttpTransport, HttpTransportConfig, Transport};
use estatus_core::config::EstatusConfig;
use estatus_core::constants::{EXIT_CRITICAL, EXIT_OK};
use estatus_core::errors::{EstatusError, EstatusResult};
use estatus_core::models::EntityStatusMap;
use estatus_core::observability::init_tracing;
use tracing::info;

use crate::args::RunArgs;

/// Retrieve, roll up and render with an already-resolved config.
///
/// The rollup is rendered only once every page has been fetched, so a
/// failed run writes nothing to `out`.
pub fn run_pipeline<T, W>(
    config: &EstatusConfig,
    transport: &T,
    out: &mut W,
) -> EstatusResult<EntityStatusMap>
where
    T: Transport + ?Sized,
    W: Write + ?Sized,
{
    let events = fetch_namespace_events(transport, config)?;
    let statuses = estatus_rollup::rollup(&events);
    info!(
        namespace = config.backend.namespace.as_deref().unwrap_or_default(),
        events = events.len(),
        entities = statuses.len(),
        "namespace rolled up"
    );
    estatus_output::render(&statuses, config.output.format, out)?;
    Ok(statuses)
}

/// Resolve configuration, set up logging, and run against the live backend.
pub fn run<W>(args: &RunArgs, working_dir: &Path, out: &mut W) -> EstatusResult<EntityStatusMap>
where
    W: Write + ?Sized,
{
    let config =
        EstatusConfig::load(args.config_path.as_deref(), working_dir, Some(&args.overrides))?;
    init_tracing(&config.observability);

    let transport =
        HttpTransport::new(&HttpTransportConfig::from_timeout_secs(config.backend.timeout_secs))?;
    run_pipeline(&config, &transport, out)
}

/// Process exit code for a run outcome.
pub fn exit_code<T>(result: &Result<T, EstatusError>) -> i32 {
    match result {
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_CRITICAL,
    }
}
