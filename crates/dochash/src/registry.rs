//! The record registry: hashing, access control and verification over any key
//! type.
//!
//! [`DocumentHasher`](crate::DocumentHasher) and
//! [`StringHasher`](crate::StringHasher) are thin facades over this type.
//!
//! Every mutation runs inside a single store transaction, so the owner check
//! and the write it guards see the same record.

use std::marker::PhantomData;

use dochash_core::{
    validate_field, Digest, HashAlgorithm, Identity, OwnerKey, Record, RecordKey, RecordView,
};
use dochash_store::Store;

use crate::config::{CreatePolicy, HasherConfig};
use crate::error::{HasherError, Result};

/// Owner-controlled digest records keyed by `K`.
pub struct Registry<K: RecordKey, S: Store<K>> {
    /// Identity fixed at construction; unrelated to per-record ownership.
    contract_owner: Identity,
    store: S,
    config: HasherConfig,
    _key: PhantomData<fn() -> K>,
}

impl<K: RecordKey, S: Store<K>> Registry<K, S> {
    /// Create a registry over `store`.
    pub fn new(contract_owner: Identity, store: S, config: HasherConfig) -> Result<Self> {
        config.validate()?;
        validate_field("identity", contract_owner.as_str(), config.max_key_len)?;
        Ok(Self {
            contract_owner,
            store,
            config,
            _key: PhantomData,
        })
    }

    pub fn contract_owner(&self) -> &Identity {
        &self.contract_owner
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.config.algorithm
    }

    /// Digest `content` with this registry's algorithm.
    pub fn hash(&self, content: &[u8]) -> Digest {
        self.config.algorithm.digest(content)
    }

    /// Number of records.
    pub fn len(&self) -> Result<usize> {
        Ok(self.store.count()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Owner operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Hash `content` and store it under `key`.
    ///
    /// An occupied key is handled according to [`CreatePolicy`].
    pub fn create(&self, caller: &Identity, key: &K, content: &[u8]) -> Result<Digest> {
        self.check_identity(caller)?;
        key.validate(self.config.max_key_len)?;

        let digest = self.hash(content);
        let policy = self.config.create_policy;

        self.store.transact::<_, HasherError, _>(key, |slot| {
            if let Some(record) = slot.as_mut() {
                match policy {
                    CreatePolicy::Overwrite => {}
                    CreatePolicy::RejectExisting => {
                        return Err(HasherError::AlreadyExists(key.to_string()));
                    }
                    CreatePolicy::OwnerChecked => authorize(key, record, caller, "create")?,
                }
                record.rewrite(digest);
                tracing::debug!(%key, %caller, ?policy, revision = record.revision, "document re-created");
                return Ok(());
            }

            let owner = key.initial_owner(caller);
            tracing::debug!(%key, %caller, %owner, "document created");
            *slot = Some(Record::new(digest, owner));
            Ok(())
        })?;

        Ok(digest)
    }

    /// Stored digest, for the owner only.
    pub fn read(&self, caller: &Identity, key: &K) -> Result<Digest> {
        Ok(self.describe(caller, key)?.digest)
    }

    /// Full record view, for the owner only.
    pub fn describe(&self, caller: &Identity, key: &K) -> Result<RecordView> {
        self.check_identity(caller)?;
        key.validate(self.config.max_key_len)?;

        let record = self.resolve(key)?;
        authorize(key, &record, caller, "read")?;
        Ok(RecordView::from(&record))
    }

    /// Re-hash the record with `content`. The owner is unchanged.
    pub fn update(&self, caller: &Identity, key: &K, content: &[u8]) -> Result<Digest> {
        self.check_identity(caller)?;
        key.validate(self.config.max_key_len)?;

        let digest = self.hash(content);
        self.store.transact::<_, HasherError, _>(key, |slot| {
            let record = occupied(key, slot)?;
            authorize(key, record, caller, "update")?;
            record.rewrite(digest);
            tracing::debug!(%key, %caller, revision = record.revision, "document updated");
            Ok(())
        })?;

        Ok(digest)
    }

    /// Hand the record to `new_owner`. Takes effect immediately.
    pub fn change_owner(&self, caller: &Identity, key: &K, new_owner: Identity) -> Result<()> {
        self.check_identity(caller)?;
        self.check_identity(&new_owner)?;
        key.validate(self.config.max_key_len)?;

        self.store.transact::<_, HasherError, _>(key, |slot| {
            let record = occupied(key, slot)?;
            authorize(key, record, caller, "change_owner")?;
            tracing::debug!(%key, from = %record.owner, to = %new_owner, "owner changed");
            record.transfer(new_owner);
            Ok(())
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Public verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether `content` hashes to the digest stored under `key`.
    pub fn verify_by_content(&self, key: &K, content: &[u8]) -> Result<bool> {
        key.validate(self.config.max_key_len)?;
        let record = self.resolve(key)?;
        Ok(self.hash(content) == record.digest)
    }

    /// Whether `candidate` equals the digest stored under `key`.
    pub fn verify_digest_at(&self, key: &K, candidate: &Digest) -> Result<bool> {
        key.validate(self.config.max_key_len)?;
        let record = self.resolve(key)?;
        Ok(record.digest == *candidate)
    }

    /// Whether any record in `partition` stores `candidate`.
    ///
    /// `None` searches the whole store. An empty partition yields `false`.
    pub fn verify_by_digest(&self, partition: Option<&OwnerKey>, candidate: &Digest) -> Result<bool> {
        if let Some(owner_key) = partition {
            validate_field("owner key", owner_key.as_str(), self.config.max_key_len)?;
        }
        Ok(self
            .store
            .any_in(partition, |_, record| record.digest == *candidate)?)
    }

    /// Whether any record in `partition` stores the digest of `content`.
    pub fn verify_content_in(&self, partition: Option<&OwnerKey>, content: &[u8]) -> Result<bool> {
        let digest = self.hash(content);
        self.verify_by_digest(partition, &digest)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve(&self, key: &K) -> Result<Record> {
        self.store
            .get(key)?
            .ok_or_else(|| HasherError::NotFound(key.to_string()))
    }

    fn check_identity(&self, identity: &Identity) -> Result<()> {
        validate_field("identity", identity.as_str(), self.config.max_key_len)?;
        Ok(())
    }
}

fn occupied<'a, K: RecordKey>(key: &K, slot: &'a mut Option<Record>) -> Result<&'a mut Record> {
    slot.as_mut()
        .ok_or_else(|| HasherError::NotFound(key.to_string()))
}

fn authorize<K: RecordKey>(key: &K, record: &Record, caller: &Identity, op: &str) -> Result<()> {
    if record.is_owned_by(caller) {
        return Ok(());
    }
    tracing::warn!(%key, %caller, op, "caller is not the record owner");
    Err(HasherError::NotAuthorized {
        key: key.to_string(),
        caller: caller.clone(),
    })
}
