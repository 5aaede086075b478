//! Payload fingerprinting.
//!
//! The fingerprint of a KHQR payload is the MD5 of its UTF-8 encoding. It
//! depends only on the payload text, never on the generator that built it.

use serde::{Deserialize, Serialize};

use khqr_digest_core::{DigestEncoding, Md5, Md5Digest, SurrogatePolicy};

use crate::error::Result;

/// Configuration for a [`Fingerprinter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Handling of unpaired surrogates in UTF-16 payloads.
    pub surrogate_policy: SurrogatePolicy,
    /// Output encoding for [`Fingerprinter::fingerprint_string`].
    pub digest_encoding: String,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            surrogate_policy: SurrogatePolicy::Replace,
            digest_encoding: DigestEncoding::Hex.as_str().to_string(),
        }
    }
}

impl FingerprintConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Computes stable fingerprints over payload strings.
#[derive(Debug, Clone, Default)]
pub struct Fingerprinter {
    config: FingerprintConfig,
}

impl Fingerprinter {
    /// Create a fingerprinter, validating the configured digest encoding.
    pub fn new(config: FingerprintConfig) -> Result<Self> {
        config.digest_encoding.parse::<DigestEncoding>()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    fn engine(&self) -> Md5 {
        Md5::with_policy(self.config.surrogate_policy)
    }

    /// Fingerprint a payload.
    pub fn fingerprint(&self, payload: &str) -> Md5Digest {
        let mut md5 = self.engine();
        md5.update(payload);
        let digest = md5.finalize();
        tracing::debug!(payload_len = payload.len(), %digest, "fingerprinted payload");
        digest
    }

    /// Fingerprint a payload given as UTF-16 code units.
    pub fn fingerprint_utf16(&self, units: &[u16]) -> Result<Md5Digest> {
        let mut md5 = self.engine();
        md5.update_utf16(units)?;
        let bytes = md5.bytes_consumed();
        let digest = md5.finalize();
        tracing::debug!(units = units.len(), bytes, %digest, "fingerprinted utf-16 payload");
        Ok(digest)
    }

    /// Fingerprint the concatenation of `parts` without joining them first.
    pub fn fingerprint_parts<'a, I>(&self, parts: I) -> Md5Digest
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut md5 = self.engine();
        for part in parts {
            md5.update(part);
        }
        md5.finalize()
    }

    /// Fingerprint a payload and render it in the configured encoding.
    pub fn fingerprint_string(&self, payload: &str) -> Result<String> {
        let mut md5 = self.engine();
        md5.update(payload);
        Ok(md5.digest(&self.config.digest_encoding)?)
    }

    /// Check a payload against an expected hex fingerprint (either case).
    pub fn verify(&self, payload: &str, expected: &str) -> Result<bool> {
        let expected = Md5Digest::from_hex(expected)?;
        let actual = self.fingerprint(payload);
        if actual != expected {
            tracing::warn!(%expected, %actual, "fingerprint mismatch");
            return Ok(false);
        }
        Ok(true)
    }
}
