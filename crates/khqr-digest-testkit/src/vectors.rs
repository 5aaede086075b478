//! Golden test vectors for deterministic verification.
//!
//! MD5 vectors include the RFC 1321 appendix A.5 suite plus UTF-8 inputs.
//! Expected digests were cross-checked against independent MD5 tools.

use serde::Serialize;

use khqr_digest_core::{encode_utf16, Md5, SurrogatePolicy};

use crate::fixtures::{sample_khqr_payload, KHMER_RIEL};

/// A known MD5 input and digest.
#[derive(Debug, Clone, Serialize)]
pub struct Md5Vector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input text, hashed as UTF-8.
    pub input: &'static str,
    /// Number of times `input` is repeated.
    pub repeat: usize,
    /// Expected digest (hex).
    pub expected_md5: &'static str,
}

impl Md5Vector {
    /// The full message bytes.
    pub fn message(&self) -> Vec<u8> {
        self.input.repeat(self.repeat).into_bytes()
    }

    /// Hash the vector with the given engine, streaming one repetition at a time.
    pub fn digest_with(&self, md5: &mut Md5) -> String {
        for _ in 0..self.repeat {
            md5.update(self.input);
        }
        md5.digest_hex()
    }
}

/// A known UTF-16 to UTF-8 encoding.
#[derive(Debug, Clone, Serialize)]
pub struct Utf8Vector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// UTF-16 code units.
    pub units: &'static [u16],
    /// Policy to encode with.
    pub policy: SurrogatePolicy,
    /// Expected bytes, or `None` if encoding must fail.
    pub expected: Option<&'static [u8]>,
}

/// Get all MD5 vectors.
pub fn md5_vectors() -> Vec<Md5Vector> {
    vec![
        Md5Vector {
            name: "empty",
            input: "",
            repeat: 1,
            expected_md5: "d41d8cd98f00b204e9800998ecf8427e",
        },
        Md5Vector {
            name: "rfc1321 a",
            input: "a",
            repeat: 1,
            expected_md5: "0cc175b9c0f1b6a831c399e269772661",
        },
        Md5Vector {
            name: "rfc1321 abc",
            input: "abc",
            repeat: 1,
            expected_md5: "900150983cd24fb0d6963f7d28e17f72",
        },
        Md5Vector {
            name: "rfc1321 message digest",
            input: "message digest",
            repeat: 1,
            expected_md5: "f96b697d7cb7938d525a2f31aaf161d0",
        },
        Md5Vector {
            name: "rfc1321 alphabet",
            input: "abcdefghijklmnopqrstuvwxyz",
            repeat: 1,
            expected_md5: "c3fcd3d76192e4007dfb496cca67e13b",
        },
        Md5Vector {
            name: "rfc1321 alphanumeric",
            input: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            repeat: 1,
            expected_md5: "d174ab98d277d9f5a5611c2c9f419d9f",
        },
        Md5Vector {
            name: "rfc1321 digits",
            input: "1234567890",
            repeat: 8,
            expected_md5: "57edf4a22be3c955ac49da2e2107b67a",
        },
        Md5Vector {
            name: "million a",
            input: "a",
            repeat: 1_000_000,
            expected_md5: "7707d6ae4e027c70eea2a935c2296f21",
        },
        Md5Vector {
            name: "emoji",
            input: "\u{1F600}",
            repeat: 1,
            expected_md5: "2a02eac39d716a70ecf37579185927b6",
        },
        Md5Vector {
            name: "khmer riel",
            input: KHMER_RIEL,
            repeat: 1,
            expected_md5: "df588ca2f26a5f3f2d2f1412c310af96",
        },
        Md5Vector {
            name: "mixed widths",
            input: "Caf\u{00E9} \u{2615} \u{1D11E}",
            repeat: 1,
            expected_md5: "35bca66ad322bc08d4035b594ee8f47b",
        },
        Md5Vector {
            name: "replacement character",
            input: "A\u{FFFD}B",
            repeat: 1,
            expected_md5: "80209518083f5ba5840d45dc93fa76af",
        },
        Md5Vector {
            name: "khqr payload",
            input: sample_khqr_payload(),
            repeat: 1,
            expected_md5: "a5c0da3400e28f61414e27237c8f7c3b",
        },
    ]
}

/// Get all UTF-8 encoding vectors.
pub fn utf8_vectors() -> Vec<Utf8Vector> {
    vec![
        Utf8Vector {
            name: "ascii",
            units: &[0x4B, 0x48, 0x51, 0x52],
            policy: SurrogatePolicy::Reject,
            expected: Some(&b"KHQR"[..]),
        },
        Utf8Vector {
            name: "mixed widths utf-16",
            units: &[0x43, 0x61, 0x66, 0xE9, 0x20, 0x2615, 0x20, 0xD834, 0xDD1E],
            policy: SurrogatePolicy::Reject,
            expected: Some(&[
                0x43, 0x61, 0x66, 0xC3, 0xA9, 0x20, 0xE2, 0x98, 0x95, 0x20, 0xF0, 0x9D, 0x84,
                0x9E,
            ]),
        },
        Utf8Vector {
            name: "emoji pair",
            units: &[0xD83D, 0xDE00],
            policy: SurrogatePolicy::Reject,
            expected: Some(&[0xF0, 0x9F, 0x98, 0x80]),
        },
        Utf8Vector {
            name: "lone high surrogate replaced",
            units: &[0x41, 0xD800, 0x42],
            policy: SurrogatePolicy::Replace,
            expected: Some(&[0x41, 0xEF, 0xBF, 0xBD, 0x42]),
        },
        Utf8Vector {
            name: "lone low surrogate passed through",
            units: &[0xDC00],
            policy: SurrogatePolicy::PassThrough,
            expected: Some(&[0xED, 0xB0, 0x80]),
        },
        Utf8Vector {
            name: "lone surrogate rejected",
            units: &[0x41, 0xDBFF],
            policy: SurrogatePolicy::Reject,
            expected: None,
        },
    ]
}

/// Verify every vector against the implementation.
///
/// Returns `(name, matches, actual)` per vector; `actual` is hex.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let md5 = md5_vectors().into_iter().map(|v| {
        let hex = v.digest_with(&mut Md5::new());
        (v.name.to_string(), hex == v.expected_md5, hex)
    });

    let utf8 = utf8_vectors().into_iter().map(|v| {
        let result = encode_utf16(v.units, v.policy);
        let matches = match (&result, v.expected) {
            (Ok(bytes), Some(expected)) => bytes.as_slice() == expected,
            (Err(_), None) => true,
            _ => false,
        };
        let actual = match result {
            Ok(bytes) => hex::encode(bytes),
            Err(e) => e.to_string(),
        };
        (v.name.to_string(), matches, actual)
    });

    md5.chain(utf8).collect()
}
