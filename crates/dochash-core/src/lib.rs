//! # dochash Core
//!
//! Pure primitives for dochash: digests, identities, document keys and records.
//!
//! This crate contains no I/O, no storage, no locking. It is pure computation
//! over the values the record store keeps.
//!
//! ## Key Types
//!
//! - [`Digest`] - Fixed-width (32 byte) content hash
//! - [`HashAlgorithm`] - The primitive a store hashes content with
//! - [`Identity`] - Who is calling, or who owns a record
//! - [`DocumentKey`] - Composite `(owner key, document id)` key
//! - [`FlatKey`] - Single-field key of the string hasher variant
//! - [`Record`] - A stored digest and its current owner
//!
//! ## Digest Equality
//!
//! Digests compare in constant time over all 32 bytes. There is no truncated
//! or case-insensitive comparison anywhere in the crate.

pub mod crypto;
pub mod error;
pub mod record;
pub mod types;
pub mod validation;

pub use crypto::{Digest, HashAlgorithm, DIGEST_LEN};
pub use error::{CoreError, Result};
pub use record::{Record, RecordView};
pub use types::{DocumentId, DocumentKey, FlatKey, Identity, OwnerKey, RecordKey};
pub use validation::{validate_field, DEFAULT_MAX_KEY_LEN};
