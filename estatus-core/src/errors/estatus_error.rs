//! Run-level error aggregating every subsystem.

use std::fmt;

use super::error_code::ErrorCode;
use super::{BackendError, ConfigError, OutputError};

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configuration,
    Retrieval,
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Configuration => "configuration",
            Stage::Retrieval => "retrieval",
            Stage::Output => "output",
        })
    }
}

/// Any failure that aborts a run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EstatusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Retrieval error: {0}")]
    Backend(#[from] BackendError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl EstatusError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Config(_) => Stage::Configuration,
            Self::Backend(_) => Stage::Retrieval,
            Self::Output(_) => Stage::Output,
        }
    }
}

impl ErrorCode for EstatusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Backend(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
        }
    }
}

pub type EstatusResult<T> = Result<T, EstatusError>;
