//! Error types for dochash core.

use thiserror::Error;

/// Errors raised while building or parsing core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid {field}: {reason}")]
    InvalidKey { field: &'static str, reason: String },

    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
