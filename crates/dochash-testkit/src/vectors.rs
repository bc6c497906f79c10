//! Golden digest vectors.
//!
//! Fixed inputs with their expected digests, so every build hashes content
//! exactly the way an external explorer recomputing the digest would.

use dochash_core::{Digest, HashAlgorithm, Result};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub algorithm: HashAlgorithm,
    pub content: &'static [u8],
    /// Expected digest (hex).
    pub expected_hex: &'static str,
}

impl GoldenVector {
    /// Parse `expected_hex` with the same parser callers use.
    pub fn expected(&self) -> Result<Digest> {
        Digest::from_hex(self.expected_hex)
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "sha256 empty",
            algorithm: HashAlgorithm::Sha256,
            content: b"",
            expected_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        GoldenVector {
            name: "sha256 lowercase file",
            algorithm: HashAlgorithm::Sha256,
            content: b"file",
            expected_hex: "3b9c358f36f0a31b6ad3e14f309c7cf198ac9246e8316f9ce543d5b19ac02b80",
        },
        GoldenVector {
            name: "sha256 capitalised File",
            algorithm: HashAlgorithm::Sha256,
            content: b"File",
            expected_hex: "50009ce1da4d15e1c4a04024df691eed5f0d598e2c4c67092f205366d0adf99e",
        },
        GoldenVector {
            name: "sha256 hello",
            algorithm: HashAlgorithm::Sha256,
            content: b"hello",
            expected_hex: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        },
        GoldenVector {
            name: "blake3 empty",
            algorithm: HashAlgorithm::Blake3,
            content: b"",
            expected_hex: "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
        },
    ]
}

/// Check every vector.
///
/// Returns `(name, matches, actual_hex)` per vector. A vector whose expected
/// hex does not parse is an error.
pub fn verify_all_vectors() -> Result<Vec<(String, bool, String)>> {
    all_vectors()
        .iter()
        .map(|v| {
            let expected = v.expected()?;
            let actual = v.algorithm.digest(v.content);
            Ok((v.name.to_string(), actual == expected, actual.to_hex()))
        })
        .collect()
}
