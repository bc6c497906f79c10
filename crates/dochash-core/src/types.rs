//! Strong type definitions for dochash.
//!
//! Owner keys, document ids and identities are all opaque strings, wrapped in
//! newtypes so one cannot be passed where another is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::error::Result;
use crate::validation::validate_field;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the underlying string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the underlying string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "({:?})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_newtype!(
    /// A party that calls into the store or owns a record.
    Identity,
    "Identity"
);

string_newtype!(
    /// The owner half of a composite document key.
    OwnerKey,
    "OwnerKey"
);

string_newtype!(
    /// The document half of a composite key, or the whole key of a flat store.
    DocumentId,
    "DocumentId"
);

impl From<&OwnerKey> for Identity {
    fn from(key: &OwnerKey) -> Self {
        Identity(key.0.clone())
    }
}

/// A key that addresses one record in a store.
pub trait RecordKey: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Identity that owns a record freshly created under this key by `caller`.
    fn initial_owner(&self, caller: &Identity) -> Identity;

    /// Owner key this record is grouped under, if the key type has one.
    fn partition(&self) -> Option<&OwnerKey>;

    /// Check every component of the key against `max_len` bytes.
    fn validate(&self, max_len: usize) -> Result<()>;
}

/// Composite key: `(owner key, document id)`.
///
/// The same document id under two owner keys addresses two records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    pub owner_key: OwnerKey,
    pub document_id: DocumentId,
}

impl DocumentKey {
    pub fn new(owner_key: impl Into<OwnerKey>, document_id: impl Into<DocumentId>) -> Self {
        Self {
            owner_key: owner_key.into(),
            document_id: document_id.into(),
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner_key, self.document_id)
    }
}

impl RecordKey for DocumentKey {
    fn initial_owner(&self, _caller: &Identity) -> Identity {
        Identity::from(&self.owner_key)
    }

    fn partition(&self) -> Option<&OwnerKey> {
        Some(&self.owner_key)
    }

    fn validate(&self, max_len: usize) -> Result<()> {
        validate_field("owner key", self.owner_key.as_str(), max_len)?;
        validate_field("document id", self.document_id.as_str(), max_len)
    }
}

/// Flat key of the string hasher: the document id alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatKey(pub DocumentId);

impl FlatKey {
    pub fn new(document_id: impl Into<DocumentId>) -> Self {
        Self(document_id.into())
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.0
    }
}

impl fmt::Display for FlatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl RecordKey for FlatKey {
    /// With no owner key to seed ownership, the creator owns the record.
    fn initial_owner(&self, caller: &Identity) -> Identity {
        caller.clone()
    }

    fn partition(&self) -> Option<&OwnerKey> {
        None
    }

    fn validate(&self, max_len: usize) -> Result<()> {
        validate_field("document id", self.0.as_str(), max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_composite_keys_distinct_per_owner() {
        let a = DocumentKey::new("A1", "1");
        let b = DocumentKey::new("B2", "1");
        assert_ne!(a, b);
        assert_eq!(a, DocumentKey::new("A1", "1"));
    }

    #[test]
    fn test_composite_initial_owner_is_owner_key() {
        let key = DocumentKey::new("A1", "1");
        let caller = Identity::new("someone-else");
        assert_eq!(key.initial_owner(&caller), Identity::new("A1"));
    }

    #[test]
    fn test_flat_initial_owner_is_caller() {
        let key = FlatKey::new("doc");
        let caller = Identity::new("alice");
        assert_eq!(key.initial_owner(&caller), caller);
        assert!(key.partition().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(DocumentKey::new("A1", "1").to_string(), "A1/1");
        assert_eq!(FlatKey::new("doc").to_string(), "doc");
        assert_eq!(format!("{:?}", Identity::new("A1")), "Identity(\"A1\")");
    }

    #[test]
    fn test_validate_reports_field() {
        let key = DocumentKey::new("A1", "x".repeat(10));
        match key.validate(4) {
            Err(CoreError::InvalidKey { field, .. }) => assert_eq!(field, "document id"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(key.validate(10).is_ok());
    }

    #[test]
    fn test_serde_transparent() {
        let id = Identity::new("A1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A1\"");
    }
}
