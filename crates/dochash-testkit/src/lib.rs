//! # dochash Testkit
//!
//! Testing utilities for dochash.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known digests for fixed inputs, per algorithm
//! - **Generators**: Proptest strategies for keys, identities and content
//! - **Fixtures**: Pre-built hashers with fixture identities
//!
//! ## Golden Vectors
//!
//! ```rust
//! use dochash_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, hex) in verify_all_vectors().unwrap() {
//!     assert!(ok, "{name}: got {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use dochash_testkit::generators::DocumentParams;
//!
//! proptest! {
//!     #[test]
//!     fn create_then_read(params: DocumentParams) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use dochash_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let digest = fixture.hasher.create(&fixture.owner, "A1", "1", "file").unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{identities, init_tracing, TestFixture};
pub use generators::{DocumentParams, OwnedDocument};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
