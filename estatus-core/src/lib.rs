//! # estatus-core
//!
//! Foundation crate for entities-status.
//! Defines the event and rollup data model, errors, config, constants, and
//! tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;

// Re-export the most commonly used types at the crate root.
pub use config::{EstatusConfig, OutputFormat};
pub use errors::{EstatusError, EstatusResult};
pub use models::{display_token, EntityStatus, EntityStatusMap, Event, Severity};
