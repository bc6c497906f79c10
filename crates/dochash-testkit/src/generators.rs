//! Proptest generators for property-based testing.

use proptest::prelude::*;

use dochash_core::{Digest, DocumentId, DocumentKey, HashAlgorithm, Identity, OwnerKey};

/// Generate a short opaque key component.
pub fn key_component() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{0,16}".prop_map(String::from)
}

pub fn owner_key() -> impl Strategy<Value = OwnerKey> {
    key_component().prop_map(OwnerKey::new)
}

pub fn document_id() -> impl Strategy<Value = DocumentId> {
    key_component().prop_map(DocumentId::new)
}

pub fn document_key() -> impl Strategy<Value = DocumentKey> {
    (owner_key(), document_id()).prop_map(|(o, d)| DocumentKey {
        owner_key: o,
        document_id: d,
    })
}

pub fn identity() -> impl Strategy<Value = Identity> {
    "[a-z][a-z0-9]{0,15}".prop_map(Identity::new)
}

/// Generate a random Digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

pub fn algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![Just(HashAlgorithm::Blake3), Just(HashAlgorithm::Sha256)]
}

/// Generate content bytes of specified max length.
pub fn content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// A document to create: its key and content.
#[derive(Debug, Clone)]
pub struct DocumentParams {
    pub key: DocumentKey,
    pub content: Vec<u8>,
}

impl DocumentParams {
    /// The identity that owns this document right after creation.
    pub fn owner(&self) -> Identity {
        Identity::from(&self.key.owner_key)
    }
}

impl Arbitrary for DocumentParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (document_key(), content(256))
            .prop_map(|(key, content)| DocumentParams { key, content })
            .boxed()
    }
}

/// A document plus a second, different content for updates and a stranger
/// who does not own it.
#[derive(Debug, Clone)]
pub struct OwnedDocument {
    pub doc: DocumentParams,
    pub next_content: Vec<u8>,
    pub stranger: Identity,
}

impl Arbitrary for OwnedDocument {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<DocumentParams>(), content(256), identity())
            .prop_filter("update content must differ", |(doc, next, _)| {
                doc.content != *next
            })
            .prop_filter("stranger must not own the document", |(doc, _, stranger)| {
                *stranger != doc.owner()
            })
            .prop_map(|(doc, next_content, stranger)| OwnedDocument {
                doc,
                next_content,
                stranger,
            })
            .boxed()
    }
}
