//! MD5 message digest (RFC 1321).
//!
//! A streaming engine: input is absorbed in 64-byte blocks as it arrives,
//! so memory use stays constant however large the payload is. MD5 is used
//! here as a content fingerprint, not as a security primitive.
//!
//! All register arithmetic is modulo 2^32 (`wrapping_add`, `rotate_left`).

use std::fmt;
use std::str::FromStr;

use crate::buffer::ByteBuffer;
use crate::error::CoreError;
use crate::types::Md5Digest;
use crate::utf8::{SurrogatePolicy, Utf8Encoder};

const BLOCK_LEN: usize = 64;

/// Offset of the length field inside the final block.
const LENGTH_OFFSET: usize = 56;

/// Initial register values A, B, C, D.
const INIT_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Left-rotate amounts, one per round.
const SHIFTS: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// T[i] = floor(2^32 * |sin(i + 1)|)
const T: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Output encodings a digest can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestEncoding {
    Hex,
}

impl DigestEncoding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DigestEncoding::Hex => "hex",
        }
    }
}

impl FromStr for DigestEncoding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(DigestEncoding::Hex),
            other => Err(CoreError::UnsupportedDigestEncoding(other.to_string())),
        }
    }
}

/// Input accepted by [`Md5::update`].
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// Text, hashed as its UTF-8 encoding.
    Text(&'a str),
    /// Raw bytes, hashed as-is.
    Bytes(&'a [u8]),
}

impl<'a> Input<'a> {
    fn as_bytes(&self) -> &'a [u8] {
        match *self {
            // A &str is already stored as UTF-8, byte for byte what the encoder emits.
            Input::Text(s) => s.as_bytes(),
            Input::Bytes(b) => b,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(b: &'a [u8]) -> Self {
        Input::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Input::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Input::Bytes(b.as_slice())
    }
}

impl<'a> From<&'a ByteBuffer> for Input<'a> {
    fn from(b: &'a ByteBuffer) -> Self {
        Input::Bytes(b.as_slice())
    }
}

/// Streaming MD5 engine.
///
/// `update` may be called any number of times; splitting the input across
/// calls never changes the digest. Finalizing through [`Md5::digest`],
/// [`Md5::digest_hex`] or [`Md5::finalize_reset`] resets the engine, so a
/// later `update` starts a new message.
///
/// An instance is not meant to be shared between threads while hashing;
/// `update` takes `&mut self`, so callers serialize access themselves.
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    block: [u8; BLOCK_LEN],
    block_len: usize,
    /// Total message length in bytes. The encoded bit length wraps modulo 2^64.
    length: u64,
    encoder: Utf8Encoder,
}

impl Md5 {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::with_policy(SurrogatePolicy::default())
    }

    /// Create an empty engine that applies `policy` in [`Md5::update_utf16`].
    pub fn with_policy(policy: SurrogatePolicy) -> Self {
        Self {
            state: INIT_STATE,
            block: [0u8; BLOCK_LEN],
            block_len: 0,
            length: 0,
            encoder: Utf8Encoder::new(policy),
        }
    }

    /// Hash `data` in one shot.
    pub fn digest_bytes(data: impl AsRef<[u8]>) -> Md5Digest {
        let mut md5 = Self::new();
        md5.absorb_counted(data.as_ref());
        md5.finalize()
    }

    /// The surrogate policy used for UTF-16 input.
    pub fn policy(&self) -> SurrogatePolicy {
        self.encoder.policy()
    }

    /// Bytes fed into the current message so far.
    pub fn bytes_consumed(&self) -> u64 {
        self.length
    }

    /// Append text or bytes to the message.
    pub fn update<'a>(&mut self, input: impl Into<Input<'a>>) -> &mut Self {
        let input: Input<'a> = input.into();
        self.absorb_counted(input.as_bytes());
        self
    }

    /// Append UTF-16 code units, encoded to UTF-8 under the engine's policy.
    ///
    /// If the units are rejected, nothing is appended.
    pub fn update_utf16(&mut self, units: &[u16]) -> Result<&mut Self, CoreError> {
        let bytes = self.encoder.encode(units)?;
        self.absorb_counted(&bytes);
        Ok(self)
    }

    /// Finalize and render the digest in `encoding`, then reset.
    ///
    /// Only `"hex"` is supported. An unsupported encoding leaves the engine
    /// untouched.
    pub fn digest(&mut self, encoding: &str) -> Result<String, CoreError> {
        match encoding.parse::<DigestEncoding>()? {
            DigestEncoding::Hex => Ok(self.digest_hex()),
        }
    }

    /// Finalize, reset, and return the 32-character lowercase hex digest.
    pub fn digest_hex(&mut self) -> String {
        self.finalize_reset().to_hex()
    }

    /// Finalize and reset the engine for a new message.
    pub fn finalize_reset(&mut self) -> Md5Digest {
        let digest = self.finish();
        self.reset();
        digest
    }

    /// Finalize, consuming the engine.
    pub fn finalize(mut self) -> Md5Digest {
        self.finish()
    }

    /// Discard all input and return to the initial state.
    pub fn reset(&mut self) {
        self.state = INIT_STATE;
        self.block = [0u8; BLOCK_LEN];
        self.block_len = 0;
        self.length = 0;
    }

    fn absorb_counted(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);
        self.absorb(data);
    }

    /// Feed bytes through the block buffer without touching `length`.
    fn absorb(&mut self, mut data: &[u8]) {
        if self.block_len > 0 {
            let take = (BLOCK_LEN - self.block_len).min(data.len());
            self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
            self.block_len += take;
            data = &data[take..];

            if self.block_len < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &self.block);
            self.block_len = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(&mut self.state, block);
        }

        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.block_len = rest.len();
    }

    /// Pad, append the bit length, and serialize the registers.
    fn finish(&mut self) -> Md5Digest {
        let bit_length = self.length.wrapping_mul(8);

        // 0x80 then zeros up to 56 mod 64; at most one full extra block.
        let mut padding = [0u8; BLOCK_LEN];
        padding[0] = 0x80;
        let pad_len = if self.block_len < LENGTH_OFFSET {
            LENGTH_OFFSET - self.block_len
        } else {
            BLOCK_LEN + LENGTH_OFFSET - self.block_len
        };
        self.absorb(&padding[..pad_len]);
        self.absorb(&bit_length.to_le_bytes());
        debug_assert_eq!(self.block_len, 0);

        let mut out = [0u8; Md5Digest::LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Md5Digest(out)
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md5")
            .field("bytes_consumed", &self.length)
            .field("policy", &self.policy())
            .finish()
    }
}

/// Run the 64-round compression function over one block.
fn compress(state: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut m = [0u32; 16];
    for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, k) = match i / 16 {
            0 => ((b & c) | (!b & d), i),
            1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let rotated = a
            .wrapping_add(f)
            .wrapping_add(m[k])
            .wrapping_add(T[i])
            .rotate_left(SHIFTS[i]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn md5_hex(data: &[u8]) -> String {
        Md5::digest_bytes(data).to_hex()
    }

    #[test]
    fn test_rfc1321_suite() {
        let cases: [(&str, &str); 7] = [
            ("", "d41d8cd98f00b204e9800998ecf8427e"),
            ("a", "0cc175b9c0f1b6a831c399e269772661"),
            ("abc", "900150983cd24fb0d6963f7d28e17f72"),
            ("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
            ("abcdefghijklmnopqrstuvwxyz", "c3fcd3d76192e4007dfb496cca67e13b"),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "d174ab98d277d9f5a5611c2c9f419d9f",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57edf4a22be3c955ac49da2e2107b67a",
            ),
        ];

        for (input, expected) in cases {
            let mut md5 = Md5::new();
            md5.update(input);
            assert_eq!(md5.digest_hex(), expected, "MD5({:?})", input);
        }
    }

    #[test]
    fn test_quick_brown_fox() {
        assert_eq!(
            md5_hex(b"The quick brown fox jumps over the lazy dog"),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
        assert_eq!(
            md5_hex(b"The quick brown fox jumps over the lazy dog."),
            "e4d909c290d0fb1ca068ffaddf22cbd0"
        );
    }

    #[test]
    fn test_million_a() {
        let mut md5 = Md5::new();
        let chunk = [b'a'; 1000];
        for _ in 0..1000 {
            md5.update(&chunk);
        }
        assert_eq!(md5.bytes_consumed(), 1_000_000);
        assert_eq!(md5.digest_hex(), "7707d6ae4e027c70eea2a935c2296f21");
    }

    #[test]
    fn test_padding_boundaries_match_one_shot() {
        // Lengths around the 56-byte length field and the 64-byte block edge
        for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 128] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let one_shot = Md5::digest_bytes(&data);

            let mut byte_at_a_time = Md5::new();
            for b in &data {
                byte_at_a_time.update(std::slice::from_ref(b));
            }
            assert_eq!(byte_at_a_time.finalize(), one_shot, "length {}", len);
        }
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let hex = md5_hex(b"KHQR");
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_text_and_bytes_agree() {
        let text = "\u{1780}\u{17D2}\u{1798}\u{17C2}\u{179A} 1 \u{1F600}";
        let mut from_text = Md5::new();
        from_text.update(text);
        let mut from_bytes = Md5::new();
        from_bytes.update(text.as_bytes());
        assert_eq!(from_text.finalize(), from_bytes.finalize());
    }

    #[test]
    fn test_update_is_chainable() {
        let mut md5 = Md5::new();
        let hex = md5.update("a").update(&b"b"[..]).update(&String::from("c")).digest_hex();
        assert_eq!(hex, "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_unsupported_digest_encoding_keeps_state() {
        let mut md5 = Md5::new();
        md5.update("ab");

        let err = md5.digest("base64").unwrap_err();
        assert_eq!(err, CoreError::UnsupportedDigestEncoding("base64".to_string()));
        assert!(md5.digest("HEX").is_err());
        assert_eq!(md5.bytes_consumed(), 2);

        md5.update("c");
        assert_eq!(md5.digest("hex").unwrap(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_digest_resets_for_new_message() {
        let mut md5 = Md5::new();
        md5.update("abc");
        let first = md5.digest_hex();
        assert_eq!(md5.bytes_consumed(), 0);

        let empty = md5.digest_hex();
        assert_eq!(empty, "d41d8cd98f00b204e9800998ecf8427e");

        md5.update("abc");
        assert_eq!(md5.digest_hex(), first);
    }

    #[test]
    fn test_reset_discards_input() {
        let mut md5 = Md5::new();
        md5.update("something long enough to fill more than one block of input data......");
        md5.reset();
        assert_eq!(md5.finalize(), Md5::digest_bytes(b""));
    }

    #[test]
    fn test_update_utf16() {
        let units: Vec<u16> = "abc".encode_utf16().collect();
        let mut md5 = Md5::new();
        md5.update_utf16(&units).unwrap();
        assert_eq!(md5.digest_hex(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_update_utf16_rejected_leaves_state() {
        let mut md5 = Md5::with_policy(SurrogatePolicy::Reject);
        md5.update("ab");

        let err = md5.update_utf16(&[0x63, 0xD800]).unwrap_err();
        assert!(matches!(err, CoreError::MalformedSurrogate { index: 1, .. }));
        assert_eq!(md5.bytes_consumed(), 2);

        md5.update_utf16(&[0x63]).unwrap();
        assert_eq!(md5.digest_hex(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_update_utf16_replace_policy() {
        let mut md5 = Md5::new();
        md5.update_utf16(&[0xDC00]).unwrap();
        assert_eq!(md5.finalize(), Md5::digest_bytes("\u{FFFD}"));
    }

    #[test]
    fn test_digest_encoding_parse() {
        assert_eq!("hex".parse::<DigestEncoding>().unwrap(), DigestEncoding::Hex);
        assert_eq!(DigestEncoding::Hex.as_str(), "hex");
        assert!("base64".parse::<DigestEncoding>().is_err());
        assert!("".parse::<DigestEncoding>().is_err());
    }

    #[test]
    fn test_debug_hides_state() {
        let mut md5 = Md5::new();
        md5.update("abc");
        let debug = format!("{:?}", md5);
        assert!(debug.contains("bytes_consumed: 3"));
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Md5::new();
        let mut b = Md5::new();
        a.update("payload");
        b.update("payload");
        let clone = a.clone();
        assert_eq!(a.finalize(), b.finalize());
        assert_eq!(clone.finalize(), Md5::digest_bytes("payload"));
    }

    proptest! {
        #[test]
        fn test_incremental_consistency(
            a in prop::collection::vec(any::<u8>(), 0..300),
            b in prop::collection::vec(any::<u8>(), 0..300),
        ) {
            let mut split = Md5::new();
            split.update(&a).update(&b);

            let mut joined = a.clone();
            joined.extend_from_slice(&b);

            prop_assert_eq!(split.finalize(), Md5::digest_bytes(&joined));
        }

        #[test]
        fn test_arbitrary_chunking(
            data in prop::collection::vec(any::<u8>(), 0..512),
            chunk in 1usize..80,
        ) {
            let mut md5 = Md5::new();
            for piece in data.chunks(chunk) {
                md5.update(piece);
            }
            prop_assert_eq!(md5.finalize(), Md5::digest_bytes(&data));
        }

        #[test]
        fn test_deterministic(text in any::<String>()) {
            let mut first = Md5::new();
            let mut second = Md5::new();
            first.update(&text);
            second.update(&text);
            prop_assert_eq!(first.digest_hex(), second.digest_hex());
        }
    }
}
