//! Configuration system for entities-status.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod backend_config;
pub mod defaults;
pub mod estatus_config;
pub mod observability_config;
pub mod output_config;

pub use backend_config::BackendConfig;
pub use estatus_config::{parse_bool, CliOverrides, EstatusConfig};
pub use observability_config::ObservabilityConfig;
pub use output_config::{OutputConfig, OutputFormat};
