//! # KHQR Digest Core
//!
//! Pure primitives for fingerprinting KHQR payloads: a UTF-8 encoder over
//! UTF-16 code units, an immutable byte buffer, and an MD5 digest engine.
//!
//! This crate contains no I/O and no global state. Everything is a plain
//! value owned by the caller.
//!
//! ## Key Types
//!
//! - [`Md5`] - Streaming MD5 engine (RFC 1321)
//! - [`Md5Digest`] - The 16-byte digest, rendered as 32 lowercase hex chars
//! - [`ByteBuffer`] - Immutable byte sequence with `from` / `byte_length`
//! - [`Utf8Encoder`] - UTF-16 to UTF-8 encoder with a [`SurrogatePolicy`]
//!
//! ## Example
//!
//! ```rust
//! use khqr_digest_core::Md5;
//!
//! let mut md5 = Md5::new();
//! md5.update("a").update("bc");
//! assert_eq!(md5.digest_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! ```

pub mod buffer;
pub mod error;
pub mod md5;
pub mod types;
pub mod utf8;

pub use buffer::{ByteBuffer, Source, TextEncoding};
pub use error::CoreError;
pub use md5::{DigestEncoding, Input, Md5};
pub use types::Md5Digest;
pub use utf8::{
    byte_length, byte_length_utf16, encode_utf16, encode_utf8, SurrogatePolicy, Utf8Encoder,
};
