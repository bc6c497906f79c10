//! Content hashing for dochash.
//!
//! Wraps BLAKE3 and SHA-256 behind a single fixed-width [`Digest`] type.

use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;

use crate::error::{CoreError, Result};

/// Width of every digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte content digest.
///
/// Equality is constant-time over the full width.
#[derive(Clone, Copy, Eq, Serialize, Deserialize)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from exactly 64 hex digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != DIGEST_LEN * 2 {
            return Err(CoreError::InvalidDigest(format!(
                "expected {} hex digits, got {}",
                DIGEST_LEN * 2,
                s.len()
            )));
        }
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidDigest(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = CoreError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        let arr: [u8; DIGEST_LEN] = slice.try_into().map_err(|_| {
            CoreError::InvalidDigest(format!(
                "expected {DIGEST_LEN} bytes, got {}",
                slice.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// The hash primitive a store computes digests with.
///
/// Fixed for the lifetime of a store: digests from different algorithms are
/// never compared against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Blake3,
    Sha256,
}

impl HashAlgorithm {
    /// Hash `content` into a digest.
    pub fn digest(self, content: &[u8]) -> Digest {
        match self {
            HashAlgorithm::Blake3 => Digest(*blake3::hash(content).as_bytes()),
            HashAlgorithm::Sha256 => {
                use sha2::Digest as _;
                Digest(Sha256::digest(content).into())
            }
        }
    }

    /// Hash `content` and compare against `expected`.
    pub fn matches(self, content: &[u8], expected: &Digest) -> bool {
        self.digest(content) == *expected
    }

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
