//! Proptest generators for property-based testing.

use proptest::prelude::*;

use khqr_digest_core::SurrogatePolicy;

/// Arbitrary UTF-16 code units, biased towards surrogates.
pub fn utf16_units(max_len: usize) -> impl Strategy<Value = Vec<u16>> {
    let unit = prop_oneof![
        3 => any::<u16>(),
        1 => 0xD800u16..=0xDBFF,
        1 => 0xDC00u16..=0xDFFF,
        1 => 0u16..0x80,
    ];
    prop::collection::vec(unit, 0..=max_len)
}

/// Well-formed UTF-16 code units (from a valid string).
pub fn well_formed_utf16() -> impl Strategy<Value = Vec<u16>> {
    any::<String>().prop_map(|s| s.encode_utf16().collect())
}

/// ASCII text.
pub fn ascii_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..0x80, 0..=max_len)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Byte payload of at most `max_len` bytes.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// A payload split into consecutive chunks.
pub fn byte_chunks(max_len: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(payload(max_len), 0..8)
}

/// Any surrogate policy.
pub fn surrogate_policy() -> impl Strategy<Value = SurrogatePolicy> {
    prop_oneof![
        Just(SurrogatePolicy::Replace),
        Just(SurrogatePolicy::Reject),
        Just(SurrogatePolicy::PassThrough),
    ]
}

/// A message and a split point inside it.
#[derive(Debug, Clone)]
pub struct SplitInput {
    pub message: Vec<u8>,
    pub split: usize,
}

impl SplitInput {
    /// The two halves around the split point.
    pub fn halves(&self) -> (&[u8], &[u8]) {
        self.message.split_at(self.split)
    }
}

impl Arbitrary for SplitInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        payload(300)
            .prop_flat_map(|message| {
                let len = message.len();
                (Just(message), 0..=len)
            })
            .prop_map(|(message, split)| SplitInput { message, split })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use khqr_digest_core::{byte_length_utf16, encode_utf16, encode_utf8, Md5};

    proptest! {
        #[test]
        fn test_split_input_halves(input: SplitInput) {
            let (a, b) = input.halves();
            prop_assert_eq!(a.len() + b.len(), input.message.len());
        }

        #[test]
        fn test_split_digest_matches_whole(input: SplitInput) {
            let (a, b) = input.halves();
            let mut md5 = Md5::new();
            md5.update(a).update(b);
            prop_assert_eq!(md5.finalize(), Md5::digest_bytes(&input.message));
        }

        #[test]
        fn test_chunks_digest_matches_whole(chunks in byte_chunks(100)) {
            let mut md5 = Md5::new();
            for chunk in &chunks {
                md5.update(chunk);
            }
            prop_assert_eq!(md5.finalize(), Md5::digest_bytes(chunks.concat()));
        }

        #[test]
        fn test_encoding_length_under_any_policy(
            units in utf16_units(64),
            policy in surrogate_policy(),
        ) {
            match encode_utf16(&units, policy) {
                Ok(bytes) => prop_assert_eq!(bytes.len(), byte_length_utf16(&units, policy).unwrap()),
                Err(_) => {
                    prop_assert_eq!(policy, SurrogatePolicy::Reject);
                    prop_assert!(byte_length_utf16(&units, policy).is_err());
                }
            }
        }

        #[test]
        fn test_well_formed_never_rejected(units in well_formed_utf16()) {
            prop_assert!(encode_utf16(&units, SurrogatePolicy::Reject).is_ok());
        }

        #[test]
        fn test_ascii_identity(text in ascii_text(200)) {
            let bytes = encode_utf8(&text);
            prop_assert_eq!(bytes.as_slice(), text.as_bytes());
        }
    }
}
