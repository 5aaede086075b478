//! Error types for KHQR Digest Core.

use thiserror::Error;

/// Core errors raised by the encoder, byte buffer and digest engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("unsupported digest encoding: {0}")]
    UnsupportedDigestEncoding(String),

    #[error("unpaired surrogate {unit:#06x} at code unit {index}")]
    MalformedSurrogate { index: usize, unit: u16 },
}
