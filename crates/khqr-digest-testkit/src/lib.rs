//! # KHQR Digest Testkit
//!
//! Testing utilities for KHQR Digest.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known MD5 digests and UTF-8 encodings for cross-implementation checks
//! - **Generators**: Proptest strategies for text, UTF-16 code units and chunked input
//! - **Fixtures**: Sample KHQR payloads and deterministic large inputs
//!
//! ## Golden Vectors
//!
//! ```rust
//! use khqr_digest_testkit::vectors::{md5_vectors, verify_all_vectors};
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{}: {}", name, hex);
//! }
//! assert!(!md5_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use khqr_digest_testkit::generators::utf16_units;
//!
//! proptest! {
//!     #[test]
//!     fn length_is_consistent(units in utf16_units(64)) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{deterministic_bytes, sample_khqr_payload, KHMER_RIEL};
pub use generators::{byte_chunks, utf16_units, SplitInput};
pub use vectors::{md5_vectors, utf8_vectors, verify_all_vectors, Md5Vector, Utf8Vector};
