//! # dochash
//!
//! Owner-controlled document digests: bind a document identifier to the hash
//! of its content, let only the current owner read or change it, and let
//! anyone check a plaintext or digest against it.
//!
//! ## Overview
//!
//! - **Create**: hash content and store it under `(owner key, document id)`
//! - **Read / Update**: owner-only access to the stored digest
//! - **Change owner**: immediate, unilateral transfer by the current owner
//! - **Verify**: public checks of content or digest against stored records
//!
//! ## Key Concepts
//!
//! - **Record**: a digest plus the identity that currently owns it. Records
//!   are never removed.
//! - **Caller identity**: every operation takes the caller explicitly; there
//!   is no ambient "who is calling".
//! - **Contract owner**: identity fixed when the hasher is built, unrelated to
//!   per-record ownership.
//! - **Create policy**: what `create` does on an occupied key, see
//!   [`CreatePolicy`].
//!
//! ## Usage
//!
//! ```rust
//! use dochash::{DocumentHasher, HasherConfig, HasherError};
//! use dochash::core::Identity;
//!
//! let hasher = DocumentHasher::in_memory(Identity::new("deployer"), HasherConfig::default()).unwrap();
//! let a1 = Identity::new("A1");
//!
//! let d1 = hasher.create(&a1, "A1", "1", "file").unwrap();
//! assert_eq!(hasher.read(&a1, "A1", "1").unwrap(), d1);
//!
//! hasher.change_owner(&a1, "A1", "1", "2").unwrap();
//! assert!(matches!(
//!     hasher.read(&a1, "A1", "1"),
//!     Err(HasherError::NotAuthorized { .. })
//! ));
//! assert!(hasher.verify_by_content("A1", "1", "file").unwrap());
//! ```
//!
//! ## Re-exports
//!
//! - `dochash::core` - Core primitives (Digest, Identity, keys)
//! - `dochash::store` - Storage abstraction and in-memory store

pub mod config;
pub mod document;
pub mod error;
pub mod registry;
pub mod service;
pub mod string;

// Re-export component crates
pub use dochash_core as core;
pub use dochash_store as store;

// Re-export main types for convenience
pub use config::{CreatePolicy, HasherConfig};
pub use document::DocumentHasher;
pub use error::{HasherError, Result};
pub use registry::Registry;
pub use service::{HasherHandle, HasherService};
pub use string::StringHasher;

pub use dochash_core::{
    Digest, DocumentId, DocumentKey, FlatKey, HashAlgorithm, Identity, OwnerKey, RecordView,
};
