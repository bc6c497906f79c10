//! Error types for the hashers.

use dochash_core::{CoreError, Identity};
use dochash_store::StoreError;
use thiserror::Error;

/// Errors that can occur during hasher operations.
#[derive(Debug, Error)]
pub enum HasherError {
    /// No record exists under the key.
    #[error("document not found: {0}")]
    NotFound(String),

    /// Caller is not the record's current owner.
    #[error("caller {caller} is not the owner of {key}")]
    NotAuthorized { key: String, caller: Identity },

    /// Create was refused because the key already holds a record.
    #[error("document already exists: {0}")]
    AlreadyExists(String),

    /// A key, identity or digest failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The hasher service has shut down.
    #[error("hasher service closed")]
    ServiceClosed,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl HasherError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, HasherError::NotFound(_))
    }

    pub fn is_not_authorized(&self) -> bool {
        matches!(self, HasherError::NotAuthorized { .. })
    }
}

/// Result type for hasher operations.
pub type Result<T> = std::result::Result<T, HasherError>;
