//! Rendering errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to serialize {format} output: {reason}")]
    Serialize { format: String, reason: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
