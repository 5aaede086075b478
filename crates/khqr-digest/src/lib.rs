//! # KHQR Digest
//!
//! Stable fingerprints for KHQR payload strings.
//!
//! ## Overview
//!
//! A KHQR payload is an ASCII-heavy TLV string that may carry merchant names
//! in Khmer script or other non-ASCII text. This crate computes its MD5
//! fingerprint from scratch, with no platform hashing or byte-buffer support:
//!
//! - **Byte Encoder**: UTF-16 code units or `&str` to UTF-8 bytes
//! - **Byte Buffer**: `from` / `byte_length` over an immutable byte sequence
//! - **MD5 Engine**: streaming RFC 1321 digest, rendered as lowercase hex
//!
//! The fingerprint is a non-adversarial content identifier. It says nothing
//! about authenticity.
//!
//! ## Usage
//!
//! ```rust
//! use khqr_digest::{create_hash, Fingerprinter};
//!
//! let mut md5 = create_hash("md5").unwrap();
//! let hex = md5.update("abc").digest("hex").unwrap();
//! assert_eq!(hex, "900150983cd24fb0d6963f7d28e17f72");
//!
//! let fp = Fingerprinter::default();
//! assert_eq!(fp.fingerprint("abc").to_hex(), hex);
//! ```
//!
//! ## Re-exports
//!
//! - `khqr_digest::core` - Core primitives (Md5, ByteBuffer, encoder)

pub mod error;
pub mod fingerprint;
pub mod hash;

// Re-export component crates
pub use khqr_digest_core as core;

// Re-export main types for convenience
pub use error::{DigestError, Result};
pub use fingerprint::{FingerprintConfig, Fingerprinter};
pub use hash::{create_hash, md5_hex, HashAlgorithm};

// Re-export commonly used core types
pub use khqr_digest_core::{
    byte_length, encode_utf16, encode_utf8, ByteBuffer, CoreError, Md5, Md5Digest,
    SurrogatePolicy,
};
