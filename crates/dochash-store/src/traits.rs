//! Store trait: the abstract interface for record persistence.
//!
//! This trait keeps the hashers storage-agnostic. Every mutation goes through
//! [`Store::transact`], which is the unit of atomicity: access checks run
//! inside it so nothing can interleave between a check and the write it
//! guards.

use std::sync::Arc;

use dochash_core::{OwnerKey, Record, RecordKey};

use crate::error::{Result, StoreError};

/// Result of inserting a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// Record was inserted (new key).
    Inserted,
    /// A record already exists under this key; nothing was written.
    AlreadyExists,
}

/// The Store trait: keyed record storage with atomic slot transactions.
///
/// # Design Notes
///
/// - **Serialized mutations**: two transactions never overlap.
/// - **All-or-nothing**: if the operation passed to `transact` fails, the
///   slot is left exactly as it was.
/// - **No deletion**: a slot that held a record keeps it, even if the
///   operation clears its copy.
pub trait Store<K: RecordKey>: Send + Sync {
    /// Run `op` against the slot for `key` while holding exclusive access.
    ///
    /// `op` receives a copy of the slot (`None` when the key is vacant). On
    /// `Ok`, a `Some` slot is written back; on `Err`, nothing is written.
    fn transact<T, E, F>(&self, key: &K, op: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Option<Record>) -> std::result::Result<T, E>,
        E: From<StoreError>;

    /// Get a copy of the record under `key`.
    fn get(&self, key: &K) -> Result<Option<Record>>;

    /// Check if a record exists under `key`.
    fn contains(&self, key: &K) -> Result<bool>;

    /// Whether any record in `partition` satisfies `pred`.
    ///
    /// `None` scans the whole store.
    fn any_in<P>(&self, partition: Option<&OwnerKey>, pred: P) -> Result<bool>
    where
        P: FnMut(&K, &Record) -> bool;

    /// All keys currently holding a record, in no particular order.
    fn keys(&self) -> Result<Vec<K>>;

    /// Count of records.
    fn count(&self) -> Result<usize>;
}

/// Extension trait for common store patterns.
pub trait StoreExt<K: RecordKey>: Store<K> {
    /// Insert `record` unless the key is already occupied.
    fn insert_if_absent(&self, key: &K, record: Record) -> Result<InsertResult> {
        self.transact(key, |slot| {
            if slot.is_some() {
                return Ok(InsertResult::AlreadyExists);
            }
            *slot = Some(record);
            Ok(InsertResult::Inserted)
        })
    }

    /// Whether the store holds no records.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }
}

impl<K: RecordKey, S: Store<K> + ?Sized> StoreExt<K> for S {}

impl<K: RecordKey, S: Store<K>> Store<K> for Arc<S> {
    fn transact<T, E, F>(&self, key: &K, op: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Option<Record>) -> std::result::Result<T, E>,
        E: From<StoreError>,
    {
        (**self).transact(key, op)
    }

    fn get(&self, key: &K) -> Result<Option<Record>> {
        (**self).get(key)
    }

    fn contains(&self, key: &K) -> Result<bool> {
        (**self).contains(key)
    }

    fn any_in<P>(&self, partition: Option<&OwnerKey>, pred: P) -> Result<bool>
    where
        P: FnMut(&K, &Record) -> bool,
    {
        (**self).any_in(partition, pred)
    }

    fn keys(&self) -> Result<Vec<K>> {
        (**self).keys()
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }
}
