//! Error handling for entities-status.
//! One error enum per subsystem, `thiserror` only.

pub mod backend_error;
pub mod config_error;
pub mod error_code;
pub mod estatus_error;
pub mod output_error;

pub use backend_error::BackendError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use estatus_error::{EstatusError, EstatusResult, Stage};
pub use output_error::OutputError;
