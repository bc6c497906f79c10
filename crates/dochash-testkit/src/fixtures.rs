//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use dochash::{CreatePolicy, DocumentHasher, HasherConfig};
use dochash_core::{Digest, DocumentKey, Identity, Record};
use dochash_store::{InsertResult, StoreExt};

/// A hasher deployed by `deployer`, with `owner` ("A1") as the usual caller.
pub struct TestFixture {
    pub deployer: Identity,
    pub owner: Identity,
    pub hasher: DocumentHasher,
}

impl TestFixture {
    /// Default configuration.
    pub fn new() -> Self {
        Self::with_config(HasherConfig::default())
    }

    pub fn with_policy(policy: CreatePolicy) -> Self {
        Self::with_config(HasherConfig::default().with_create_policy(policy))
    }

    /// Panics on an invalid config; fixtures are for tests.
    pub fn with_config(config: HasherConfig) -> Self {
        let deployer = Identity::new("deployer");
        let hasher = DocumentHasher::in_memory(deployer.clone(), config)
            .expect("fixture config must be valid");
        Self {
            deployer,
            owner: Identity::new("A1"),
            hasher,
        }
    }

    /// Digest of `content` under this fixture's algorithm.
    pub fn digest(&self, content: impl AsRef<[u8]>) -> Digest {
        self.hasher.config().algorithm.digest(content.as_ref())
    }

    /// Put a record straight into the store, bypassing create policy and
    /// access checks. The record is owned by `owner_key`.
    pub fn seed(&self, owner_key: &str, document_id: &str, content: impl AsRef<[u8]>) -> Digest {
        let digest = self.digest(content);
        let key = DocumentKey::new(owner_key, document_id);
        let result = self
            .hasher
            .store()
            .insert_if_absent(&key, Record::new(digest, Identity::new(owner_key)))
            .expect("memory store");
        assert_eq!(result, InsertResult::Inserted, "seeded {key} twice");
        digest
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// `count` distinct identities: "party-0", "party-1", ...
pub fn identities(count: usize) -> Vec<Identity> {
    (0..count).map(|i| Identity::new(format!("party-{i}"))).collect()
}

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}
