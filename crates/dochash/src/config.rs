//! Hasher configuration.

use dochash_core::{HashAlgorithm, DEFAULT_MAX_KEY_LEN};
use serde::{Deserialize, Serialize};

use crate::error::{HasherError, Result};

/// What `create` does when the key already holds a record.
///
/// `update` always requires the caller to be the owner, but the deployed
/// contract let anyone re-create (and so overwrite) an existing record. That
/// asymmetry is kept available as [`CreatePolicy::Overwrite`]; the default
/// refuses instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatePolicy {
    /// Re-hash with no ownership check. The owner is left unchanged.
    Overwrite,
    /// Fail with `AlreadyExists`; create is once per key.
    #[default]
    RejectExisting,
    /// Re-hash only when the caller is the current owner, like `update`.
    OwnerChecked,
}

/// Configuration for a hasher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasherConfig {
    /// Hash primitive for every digest in the store.
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Behavior of `create` on an occupied key.
    #[serde(default)]
    pub create_policy: CreatePolicy,

    /// Upper bound in bytes for keys and identities.
    #[serde(default = "default_max_key_len")]
    pub max_key_len: usize,

    /// Request queue depth of a [`HasherService`](crate::service::HasherService).
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_max_key_len() -> usize {
    DEFAULT_MAX_KEY_LEN
}

fn default_queue_capacity() -> usize {
    64
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            create_policy: CreatePolicy::default(),
            max_key_len: default_max_key_len(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl HasherConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HasherError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_policy = policy;
        self
    }

    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    /// Reject settings no hasher can run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_key_len == 0 {
            return Err(HasherError::Config("max_key_len must be at least 1".into()));
        }
        if self.queue_capacity == 0 {
            return Err(HasherError::Config(
                "queue_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
