//! The document hasher: digests keyed by `(owner key, document id)`.

use dochash_core::{Digest, DocumentId, DocumentKey, Identity, OwnerKey, RecordView};
use dochash_store::{MemoryStore, Store};

use crate::config::HasherConfig;
use crate::error::Result;
use crate::registry::Registry;

/// Document digests under composite keys.
///
/// A freshly created record is owned by the identity named by its owner key,
/// whoever submitted it. From then on only the current owner may read,
/// update or transfer it; verification is open to anyone.
pub struct DocumentHasher<S: Store<DocumentKey> = MemoryStore<DocumentKey>> {
    registry: Registry<DocumentKey, S>,
}

impl DocumentHasher<MemoryStore<DocumentKey>> {
    /// A hasher over a fresh in-memory store.
    pub fn in_memory(contract_owner: Identity, config: HasherConfig) -> Result<Self> {
        Self::new(contract_owner, MemoryStore::new(), config)
    }
}

impl<S: Store<DocumentKey>> DocumentHasher<S> {
    pub fn new(contract_owner: Identity, store: S, config: HasherConfig) -> Result<Self> {
        Ok(Self {
            registry: Registry::new(contract_owner, store, config)?,
        })
    }

    /// Identity that deployed this hasher.
    pub fn contract_owner(&self) -> &Identity {
        self.registry.contract_owner()
    }

    pub fn config(&self) -> &HasherConfig {
        self.registry.config()
    }

    pub fn store(&self) -> &S {
        self.registry.store()
    }

    pub fn len(&self) -> Result<usize> {
        self.registry.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.registry.is_empty()
    }

    /// Hash `content` and record it under `(owner_key, document_id)`.
    pub fn create(
        &self,
        caller: &Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        content: impl AsRef<[u8]>,
    ) -> Result<Digest> {
        let key = DocumentKey::new(owner_key, document_id);
        self.registry.create(caller, &key, content.as_ref())
    }

    pub fn read(
        &self,
        caller: &Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
    ) -> Result<Digest> {
        let key = DocumentKey::new(owner_key, document_id);
        self.registry.read(caller, &key)
    }

    pub fn describe(
        &self,
        caller: &Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
    ) -> Result<RecordView> {
        let key = DocumentKey::new(owner_key, document_id);
        self.registry.describe(caller, &key)
    }

    pub fn update(
        &self,
        caller: &Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        content: impl AsRef<[u8]>,
    ) -> Result<Digest> {
        let key = DocumentKey::new(owner_key, document_id);
        self.registry.update(caller, &key, content.as_ref())
    }

    pub fn change_owner(
        &self,
        caller: &Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        new_owner: impl Into<Identity>,
    ) -> Result<()> {
        let key = DocumentKey::new(owner_key, document_id);
        self.registry.change_owner(caller, &key, new_owner.into())
    }

    /// Whether `content` is exactly what was last hashed for the document.
    pub fn verify_by_content(
        &self,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        content: impl AsRef<[u8]>,
    ) -> Result<bool> {
        let key = DocumentKey::new(owner_key, document_id);
        self.registry.verify_by_content(&key, content.as_ref())
    }

    /// Whether any document under `owner_key` stores `candidate`.
    pub fn verify_by_digest(&self, owner_key: impl Into<OwnerKey>, candidate: &Digest) -> Result<bool> {
        let owner_key = owner_key.into();
        self.registry.verify_by_digest(Some(&owner_key), candidate)
    }

    /// Whether the one document at `(owner_key, document_id)` stores `candidate`.
    pub fn verify_digest_at(
        &self,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        candidate: &Digest,
    ) -> Result<bool> {
        let key = DocumentKey::new(owner_key, document_id);
        self.registry.verify_digest_at(&key, candidate)
    }

    /// Whether any document under `owner_key` hashes to the digest of `content`.
    pub fn verify_content_for_owner(
        &self,
        owner_key: impl Into<OwnerKey>,
        content: impl AsRef<[u8]>,
    ) -> Result<bool> {
        let owner_key = owner_key.into();
        self.registry.verify_content_in(Some(&owner_key), content.as_ref())
    }
}
