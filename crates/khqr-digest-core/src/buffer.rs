//! Immutable byte buffers.
//!
//! [`ByteBuffer`] gives code written against a byte-buffer API a `from` /
//! `byte_length` pair backed by the UTF-8 encoder. It is an ordinary value:
//! callers construct it and pass it around, nothing is registered globally.

use bytes::Bytes;
use std::fmt;
use std::ops::Deref;

use crate::error::CoreError;
use crate::utf8::{self, SurrogatePolicy};

/// The only text encoding the buffer understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
}

impl TextEncoding {
    /// Resolve an optional encoding name.
    ///
    /// No name, or an empty one, means UTF-8. `utf8` and `utf-8` are accepted
    /// in any ASCII case.
    pub fn parse(name: Option<&str>) -> Result<Self, CoreError> {
        match name {
            None | Some("") => Ok(Self::Utf8),
            Some(n) if n.eq_ignore_ascii_case("utf8") || n.eq_ignore_ascii_case("utf-8") => {
                Ok(Self::Utf8)
            }
            Some(n) => Err(CoreError::UnsupportedEncoding(n.to_string())),
        }
    }
}

/// Anything a [`ByteBuffer`] can be built from.
#[derive(Debug, Clone)]
pub enum Source<'a> {
    /// Text, encoded to UTF-8.
    Text(&'a str),
    /// UTF-16 code units, encoded to UTF-8 with unpaired surrogates replaced.
    Utf16(&'a [u16]),
    /// Raw bytes, copied verbatim.
    Bytes(&'a [u8]),
    /// An owned byte vector, taken without copying.
    Owned(Vec<u8>),
    /// An existing buffer, returned as-is.
    Buffer(ByteBuffer),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(s: &'a str) -> Self {
        Source::Text(s)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(s: &'a String) -> Self {
        Source::Text(s.as_str())
    }
}

impl<'a> From<&'a [u16]> for Source<'a> {
    fn from(units: &'a [u16]) -> Self {
        Source::Utf16(units)
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Source::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Source<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Owned(bytes)
    }
}

impl From<ByteBuffer> for Source<'_> {
    fn from(buf: ByteBuffer) -> Self {
        Source::Buffer(buf)
    }
}

/// An immutable, 0-indexed sequence of bytes.
///
/// Cloning is cheap: clones share the same backing storage.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteBuffer(Bytes);

impl ByteBuffer {
    /// Build a buffer from text or bytes.
    ///
    /// `encoding` is only consulted for text sources; byte sources are never
    /// reinterpreted.
    pub fn from_source<'a>(
        source: impl Into<Source<'a>>,
        encoding: Option<&str>,
    ) -> Result<Self, CoreError> {
        match source.into() {
            Source::Text(text) => {
                TextEncoding::parse(encoding)?;
                Ok(utf8::encode_utf8(text))
            }
            Source::Utf16(units) => {
                TextEncoding::parse(encoding)?;
                utf8::encode_utf16(units, SurrogatePolicy::Replace)
            }
            Source::Bytes(bytes) => Ok(Self(Bytes::copy_from_slice(bytes))),
            Source::Owned(bytes) => Ok(Self(Bytes::from(bytes))),
            Source::Buffer(buf) => Ok(buf),
        }
    }

    /// UTF-8 byte count of `text`, without building the buffer.
    pub fn byte_length(text: &str, encoding: Option<&str>) -> Result<usize, CoreError> {
        TextEncoding::parse(encoding)?;
        Ok(utf8::byte_length(text))
    }

    /// An empty buffer.
    pub const fn new() -> Self {
        Self(Bytes::new())
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Copy the bytes into a new vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Unwrap into the backing [`Bytes`].
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= 32 {
            write!(f, "ByteBuffer({})", hex::encode(&self.0))
        } else {
            write!(
                f,
                "ByteBuffer({}... {} bytes)",
                hex::encode(&self.0[..16]),
                self.0.len()
            )
        }
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for ByteBuffer {
    fn from(bytes: &'static [u8]) -> Self {
        Self(Bytes::from_static(bytes))
    }
}

impl From<Bytes> for ByteBuffer {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buf: ByteBuffer) -> Self {
        buf.0.to_vec()
    }
}
