//! Hash factory.
//!
//! Call sites written against a `createHash(algorithm)` style API select the
//! engine by name. MD5 is the only algorithm provided.

use std::str::FromStr;

use khqr_digest_core::{Input, Md5};

use crate::error::{DigestError, Result};

/// Algorithms [`create_hash`] can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
}

impl FromStr for HashAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "md5" => Ok(HashAlgorithm::Md5),
            other => Err(DigestError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Create an empty engine for `algorithm`.
pub fn create_hash(algorithm: &str) -> Result<Md5> {
    match algorithm.parse::<HashAlgorithm>()? {
        HashAlgorithm::Md5 => Ok(Md5::new()),
    }
}

/// MD5 of a single input, as 32 lowercase hex characters.
pub fn md5_hex<'a>(input: impl Into<Input<'a>>) -> String {
    Md5::new().update(input).digest_hex()
}
