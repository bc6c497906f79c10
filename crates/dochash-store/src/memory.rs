//! In-memory implementation of the Store trait.
//!
//! Everything lives in one `HashMap` behind one `RwLock`; the write lock is
//! held for the whole of a transaction.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use dochash_core::{OwnerKey, Record, RecordKey};

use crate::error::{Result, StoreError};
use crate::traits::Store;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore<K: RecordKey> {
    inner: RwLock<MemoryStoreInner<K>>,
}

struct MemoryStoreInner<K> {
    /// Records indexed by key.
    records: HashMap<K, Record>,

    /// Partition index: owner key -> keys under it.
    partitions: HashMap<OwnerKey, HashSet<K>>,
}

impl<K: RecordKey> MemoryStore<K> {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                records: HashMap::new(),
                partitions: HashMap::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryStoreInner<K>>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryStoreInner<K>>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl<K: RecordKey> Default for MemoryStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RecordKey> Store<K> for MemoryStore<K> {
    fn transact<T, E, F>(&self, key: &K, op: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Option<Record>) -> std::result::Result<T, E>,
        E: From<StoreError>,
    {
        let mut inner = self.write()?;

        let mut slot = inner.records.get(key).cloned();
        let existed = slot.is_some();
        let out = op(&mut slot)?;

        match slot {
            Some(record) => {
                inner.records.insert(key.clone(), record);
                if !existed {
                    if let Some(owner_key) = key.partition() {
                        inner
                            .partitions
                            .entry(owner_key.clone())
                            .or_default()
                            .insert(key.clone());
                    }
                    tracing::trace!(%key, "record inserted");
                }
            }
            None if existed => {
                tracing::debug!(%key, "transaction cleared an occupied slot; keeping record");
            }
            None => {}
        }

        Ok(out)
    }

    fn get(&self, key: &K) -> Result<Option<Record>> {
        let inner = self.read()?;
        Ok(inner.records.get(key).cloned())
    }

    fn contains(&self, key: &K) -> Result<bool> {
        let inner = self.read()?;
        Ok(inner.records.contains_key(key))
    }

    fn any_in<P>(&self, partition: Option<&OwnerKey>, mut pred: P) -> Result<bool>
    where
        P: FnMut(&K, &Record) -> bool,
    {
        let inner = self.read()?;

        let Some(owner_key) = partition else {
            return Ok(inner.records.iter().any(|(k, r)| pred(k, r)));
        };

        let Some(keys) = inner.partitions.get(owner_key) else {
            return Ok(false);
        };

        Ok(keys.iter().any(|k| {
            inner
                .records
                .get(k)
                .map(|r| pred(k, r))
                .unwrap_or(false)
        }))
    }

    fn keys(&self) -> Result<Vec<K>> {
        let inner = self.read()?;
        Ok(inner.records.keys().cloned().collect())
    }

    fn count(&self) -> Result<usize> {
        let inner = self.read()?;
        Ok(inner.records.len())
    }
}
