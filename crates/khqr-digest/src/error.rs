//! Error types for KHQR Digest.

use khqr_digest_core::CoreError;
use thiserror::Error;

/// Errors that can occur while hashing or fingerprinting.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Encoding or digest error from the core primitives.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Only MD5 is available.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// An expected digest was not 32 hex characters.
    #[error("invalid digest: {0}")]
    InvalidDigest(#[from] hex::FromHexError),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for KHQR Digest operations.
pub type Result<T> = std::result::Result<T, DigestError>;
