//! # dochash Store
//!
//! Storage abstraction for dochash. Provides a trait-based interface for
//! record persistence with an in-memory implementation.
//!
//! ## Overview
//!
//! The store abstracts the keyed record map behind the [`Store`] trait, so the
//! hashers built on top of it stay storage-agnostic. [`MemoryStore`] is the
//! implementation: a `HashMap` behind a single `RwLock`.
//!
//! ## Key Types
//!
//! - [`Store`] - Atomic slot transactions, lookups and scans
//! - [`StoreExt`] - Convenience helpers built on [`Store`]
//! - [`MemoryStore`] - In-process storage
//! - [`InsertResult`] - Result of an insert-if-absent
//!
//! ## Usage
//!
//! ```rust
//! use dochash_core::{DocumentKey, HashAlgorithm, Identity, Record};
//! use dochash_store::{InsertResult, MemoryStore, Store, StoreExt};
//!
//! let store: MemoryStore<DocumentKey> = MemoryStore::new();
//! let key = DocumentKey::new("A1", "1");
//! let record = Record::new(HashAlgorithm::Blake3.digest(b"file"), Identity::new("A1"));
//!
//! assert_eq!(store.insert_if_absent(&key, record).unwrap(), InsertResult::Inserted);
//! assert!(store.contains(&key).unwrap());
//! ```
//!
//! ## Design Notes
//!
//! - **All-or-nothing**: a transaction that returns an error writes nothing
//! - **No deletion**: once a key holds a record it keeps one
//! - **Owner partitions**: composite keys are indexed by owner key for scans

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{InsertResult, Store, StoreExt};
