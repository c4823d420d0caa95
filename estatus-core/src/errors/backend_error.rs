//! Errors talking to the monitoring backend.

use super::error_code::{self, ErrorCode};

/// Retrieval failures. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("invalid endpoint URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode events on page {page}: {reason}")]
    Decode { page: u32, reason: String },

    #[error("authentication failed: {reason}")]
    AuthFailed { reason: String },

    #[error("pagination still returning a cursor after {limit} pages")]
    PageLimitExceeded { limit: u32 },
}

impl ErrorCode for BackendError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } | Self::Transport { .. } => error_code::TRANSPORT_ERROR,
            Self::Status { .. } => error_code::BACKEND_ERROR,
            Self::Decode { .. } => error_code::DECODE_ERROR,
            Self::AuthFailed { .. } => error_code::AUTH_ERROR,
            Self::PageLimitExceeded { .. } => error_code::PAGE_LIMIT,
        }
    }
}
