//! The string hasher: the flat-key variant of [`DocumentHasher`](crate::DocumentHasher).
//!
//! Records are keyed by document id alone. There is no owner key to seed
//! ownership, so the caller that creates a record owns it.

use dochash_core::{Digest, DocumentId, FlatKey, Identity, RecordView};
use dochash_store::{MemoryStore, Store};

use crate::config::HasherConfig;
use crate::error::Result;
use crate::registry::Registry;

/// Digests keyed by a single document id.
pub struct StringHasher<S: Store<FlatKey> = MemoryStore<FlatKey>> {
    registry: Registry<FlatKey, S>,
}

impl StringHasher<MemoryStore<FlatKey>> {
    pub fn in_memory(contract_owner: Identity, config: HasherConfig) -> Result<Self> {
        Self::new(contract_owner, MemoryStore::new(), config)
    }
}

impl<S: Store<FlatKey>> StringHasher<S> {
    pub fn new(contract_owner: Identity, store: S, config: HasherConfig) -> Result<Self> {
        Ok(Self {
            registry: Registry::new(contract_owner, store, config)?,
        })
    }

    pub fn contract_owner(&self) -> &Identity {
        self.registry.contract_owner()
    }

    pub fn config(&self) -> &HasherConfig {
        self.registry.config()
    }

    pub fn len(&self) -> Result<usize> {
        self.registry.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.registry.is_empty()
    }

    pub fn create(
        &self,
        caller: &Identity,
        document_id: impl Into<DocumentId>,
        content: impl AsRef<[u8]>,
    ) -> Result<Digest> {
        self.registry
            .create(caller, &FlatKey::new(document_id), content.as_ref())
    }

    pub fn read(&self, caller: &Identity, document_id: impl Into<DocumentId>) -> Result<Digest> {
        self.registry.read(caller, &FlatKey::new(document_id))
    }

    pub fn describe(
        &self,
        caller: &Identity,
        document_id: impl Into<DocumentId>,
    ) -> Result<RecordView> {
        self.registry.describe(caller, &FlatKey::new(document_id))
    }

    pub fn update(
        &self,
        caller: &Identity,
        document_id: impl Into<DocumentId>,
        content: impl AsRef<[u8]>,
    ) -> Result<Digest> {
        self.registry
            .update(caller, &FlatKey::new(document_id), content.as_ref())
    }

    pub fn change_owner(
        &self,
        caller: &Identity,
        document_id: impl Into<DocumentId>,
        new_owner: impl Into<Identity>,
    ) -> Result<()> {
        self.registry
            .change_owner(caller, &FlatKey::new(document_id), new_owner.into())
    }

    pub fn verify_by_content(
        &self,
        document_id: impl Into<DocumentId>,
        content: impl AsRef<[u8]>,
    ) -> Result<bool> {
        self.registry
            .verify_by_content(&FlatKey::new(document_id), content.as_ref())
    }

    /// Whether any record in the store holds `candidate`.
    pub fn verify_by_digest(&self, candidate: &Digest) -> Result<bool> {
        self.registry.verify_by_digest(None, candidate)
    }

    pub fn verify_digest_at(
        &self,
        document_id: impl Into<DocumentId>,
        candidate: &Digest,
    ) -> Result<bool> {
        self.registry
            .verify_digest_at(&FlatKey::new(document_id), candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HasherError;

    fn hasher() -> StringHasher {
        StringHasher::in_memory(Identity::new("deployer"), HasherConfig::default()).unwrap()
    }

    #[test]
    fn test_creator_owns_record() {
        let h = hasher();
        let alice = Identity::new("alice");
        let digest = h.create(&alice, "doc", "hello").unwrap();

        assert_eq!(h.read(&alice, "doc").unwrap(), digest);
        assert!(h
            .read(&Identity::new("bob"), "doc")
            .unwrap_err()
            .is_not_authorized());
    }

    #[test]
    fn test_flat_key_is_global() {
        let h = hasher();
        h.create(&Identity::new("alice"), "doc", "hello").unwrap();

        let err = h.create(&Identity::new("bob"), "doc", "other").unwrap_err();
        assert!(matches!(err, HasherError::AlreadyExists(_)));
    }

    #[test]
    fn test_transfer_and_verify() {
        let h = hasher();
        let alice = Identity::new("alice");
        let bob = Identity::new("bob");
        let first = h.create(&alice, "doc", "v1").unwrap();

        h.change_owner(&alice, "doc", bob.clone()).unwrap();
        assert!(h.update(&alice, "doc", "v2").unwrap_err().is_not_authorized());

        let second = h.update(&bob, "doc", "v2").unwrap();
        assert_ne!(first, second);
        assert!(h.verify_by_content("doc", "v2").unwrap());
        assert!(!h.verify_by_content("doc", "v1").unwrap());
        assert!(h.verify_by_digest(&second).unwrap());
        assert!(!h.verify_by_digest(&first).unwrap());
        assert!(h.verify_digest_at("doc", &second).unwrap());
        assert_eq!(h.describe(&bob, "doc").unwrap().revision, 2);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let h = hasher();
        let alice = Identity::new("alice");

        assert!(h.read(&alice, "missing").unwrap_err().is_not_found());
        assert!(h.describe(&alice, "missing").unwrap_err().is_not_found());
        assert!(h.update(&alice, "missing", "x").unwrap_err().is_not_found());
        assert!(h
            .change_owner(&alice, "missing", Identity::new("bob"))
            .unwrap_err()
            .is_not_found());
        assert!(h
            .verify_digest_at("missing", &Digest::from_bytes([0; 32]))
            .unwrap_err()
            .is_not_found());
        assert!(h.is_empty().unwrap());
    }

    #[test]
    fn test_stranger_cannot_transfer() {
        let h = hasher();
        let alice = Identity::new("alice");
        let mallory = Identity::new("mallory");
        h.create(&alice, "doc", "v1").unwrap();

        let err = h.change_owner(&mallory, "doc", mallory.clone()).unwrap_err();
        assert!(err.is_not_authorized());
        assert_eq!(h.describe(&alice, "doc").unwrap().owner, alice);
    }

    #[test]
    fn test_unknown_document() {
        let h = hasher();
        assert!(h.verify_by_content("nope", "x").unwrap_err().is_not_found());
        assert!(!h.verify_by_digest(&Digest::from_bytes([0; 32])).unwrap());
        assert!(h.is_empty().unwrap());
        assert_eq!(h.contract_owner(), &Identity::new("deployer"));
    }
}
