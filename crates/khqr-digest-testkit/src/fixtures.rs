//! Test fixtures and helpers.
//!
//! Payload samples and deterministic bulk inputs for integration tests
//! and benchmarks.

/// "Riel" in Khmer script: nine code points, all three bytes in UTF-8.
pub const KHMER_RIEL: &str =
    "\u{1794}\u{17D2}\u{179A}\u{17B6}\u{1780}\u{17CB}\u{179A}\u{17C0}\u{179B}";

const SAMPLE_KHQR_PAYLOAD: &str = concat!(
    "000201",
    "010211",
    "29370016abaakhppxxx@abaa0109012345678",
    "52045999",
    "5303840",
    "5405100.0",
    "5802KH",
    "5912Coffee Klang",
    "6010Phnom Penh",
    "63040A1B",
);

/// A representative KHQR payload string (individual account, USD amount).
pub const fn sample_khqr_payload() -> &'static str {
    SAMPLE_KHQR_PAYLOAD
}

/// `len` pseudo-random bytes, identical for identical `seed`.
///
/// Uses xorshift64; good enough to defeat trivial patterns in block handling.
/// Distinct seeds give distinct streams.
pub fn deterministic_bytes(len: usize, seed: u64) -> Vec<u8> {
    // xorshift has a fixed point at zero; remap the one seed that lands there.
    let mut x = match seed ^ 0x9E37_79B9_7F4A_7C15 {
        0 => 0x9E37_79B9_7F4A_7C15,
        mixed => mixed,
    };
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        let word = x.to_le_bytes();
        let take = (len - out.len()).min(word.len());
        out.extend_from_slice(&word[..take]);
    }
    out
}

/// Text of at least `min_bytes` UTF-8 bytes mixing one to four byte code points.
pub fn mixed_width_text(min_bytes: usize) -> String {
    const UNIT: &str = "KHQR \u{00E9}\u{17DB}\u{1F4B8} ";
    let mut text = String::with_capacity(min_bytes + UNIT.len());
    while text.len() < min_bytes {
        text.push_str(UNIT);
    }
    text
}
