//! The stored record and its read-only view.

use serde::{Deserialize, Serialize};

use crate::crypto::Digest;
use crate::types::Identity;

/// One hashed document: its digest and the identity allowed to touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Digest of the content at the last write.
    pub digest: Digest,
    /// Identity currently allowed to read, update or transfer this record.
    pub owner: Identity,
    /// Number of digest writes; 1 after creation.
    pub revision: u64,
}

impl Record {
    /// A freshly created record.
    pub fn new(digest: Digest, owner: Identity) -> Self {
        Self {
            digest,
            owner,
            revision: 1,
        }
    }

    /// Whether `caller` is the current owner.
    pub fn is_owned_by(&self, caller: &Identity) -> bool {
        &self.owner == caller
    }

    /// Replace the digest, bumping the revision. The owner is untouched.
    pub fn rewrite(&mut self, digest: Digest) {
        self.digest = digest;
        self.revision += 1;
    }

    /// Hand the record to a new owner. The digest is untouched.
    pub fn transfer(&mut self, new_owner: Identity) {
        self.owner = new_owner;
    }
}

/// Snapshot of a record handed back to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    pub digest: Digest,
    pub owner: Identity,
    pub revision: u64,
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        Self {
            digest: record.digest,
            owner: record.owner.clone(),
            revision: record.revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::HashAlgorithm;

    #[test]
    fn test_rewrite_bumps_revision() {
        let mut record = Record::new(HashAlgorithm::Blake3.digest(b"file"), Identity::new("A1"));
        assert_eq!(record.revision, 1);

        let next = HashAlgorithm::Blake3.digest(b"File");
        record.rewrite(next);
        assert_eq!(record.revision, 2);
        assert_eq!(record.digest, next);
        assert!(record.is_owned_by(&Identity::new("A1")));
    }

    #[test]
    fn test_transfer_keeps_digest() {
        let digest = HashAlgorithm::Blake3.digest(b"file");
        let mut record = Record::new(digest, Identity::new("A1"));
        record.transfer(Identity::new("2"));

        assert!(!record.is_owned_by(&Identity::new("A1")));
        assert!(record.is_owned_by(&Identity::new("2")));
        assert_eq!(record.digest, digest);
        assert_eq!(record.revision, 1);
    }
}
