//! Strong type definitions for KHQR Digest.
//!
//! Digests are newtypes so a fingerprint can never be confused with an
//! arbitrary byte array.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 16-byte MD5 digest.
///
/// The canonical textual form is 32 lowercase hex characters, produced by
/// [`Md5Digest::to_hex`] and by `Display`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Md5Digest(pub [u8; 16]);

impl Md5Digest {
    /// Length of the digest in bytes.
    pub const LEN: usize = 16;

    /// Create a new digest from raw bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Convert to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string. Accepts either case.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != Self::LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md5({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Md5Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 16]> for Md5Digest {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Md5Digest> for [u8; 16] {
    fn from(digest: Md5Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Md5Digest {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 16] = slice.try_into()?;
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_hex_roundtrip() {
        let digest = Md5Digest::from_bytes([0x42; 16]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 32);
        let recovered = Md5Digest::from_hex(&hex).unwrap();
        assert_eq!(digest, recovered);
    }

    #[test]
    fn test_from_hex_accepts_uppercase() {
        let digest = Md5Digest::from_hex("D41D8CD98F00B204E9800998ECF8427E").unwrap();
        assert_eq!(digest.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert_eq!(
            Md5Digest::from_hex("abcd"),
            Err(hex::FromHexError::InvalidStringLength)
        );
        assert!(Md5Digest::from_hex("zz1d8cd98f00b204e9800998ecf8427e").is_err());
    }

    #[test]
    fn test_digest_display() {
        let digest = Md5Digest::from_bytes([0xab; 16]);
        assert_eq!(format!("{}", digest), "ab".repeat(16));
        assert_eq!(format!("{:x}", digest), "ab".repeat(16));
    }

    #[test]
    fn test_digest_debug() {
        let digest = Md5Digest::from_bytes([0xcd; 16]);
        let debug = format!("{:?}", digest);
        assert_eq!(debug, "Md5(cdcdcdcdcdcdcdcd)");
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = [7u8; 16];
        let digest = Md5Digest::try_from(&bytes[..]).unwrap();
        assert_eq!(digest.as_bytes(), &bytes);
        assert!(Md5Digest::try_from(&bytes[..15]).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let digest = Md5Digest::from_bytes([0x11; 16]);
        let json = serde_json::to_string(&digest).unwrap();
        let back: Md5Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, back);
    }
}
