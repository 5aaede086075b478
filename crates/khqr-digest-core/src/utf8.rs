//! UTF-8 encoding over UTF-16 code units.
//!
//! Payload text may arrive as UTF-16 code units (the native string form of
//! the hosts that build KHQR payloads), so the encoder walks code units,
//! pairs surrogates into supplementary code points and emits UTF-8:
//!
//! | Code point          | Bytes                                 |
//! |---------------------|---------------------------------------|
//! | `U+0000..U+007F`    | `0xxxxxxx`                            |
//! | `U+0080..U+07FF`    | `110xxxxx 10xxxxxx`                   |
//! | `U+0800..U+FFFF`    | `1110xxxx 10xxxxxx 10xxxxxx`          |
//! | `U+10000..U+10FFFF` | `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx` |
//!
//! Unpaired surrogates are handled according to a [`SurrogatePolicy`].

use serde::{Deserialize, Serialize};
use std::iter::Peekable;

use crate::buffer::ByteBuffer;
use crate::error::CoreError;

/// U+FFFD REPLACEMENT CHARACTER.
const REPLACEMENT: u32 = 0xFFFD;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// What to do with a surrogate code unit that is not part of a valid pair.
///
/// A high surrogate followed by anything other than a low surrogate is
/// unpaired, as is any low surrogate on its own. The unit after an unpaired
/// high surrogate is never consumed along with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurrogatePolicy {
    /// Emit U+FFFD (`EF BF BD`) in place of the unit.
    #[default]
    Replace,
    /// Fail with [`CoreError::MalformedSurrogate`].
    Reject,
    /// Encode the surrogate value itself as three bytes (WTF-8 style).
    PassThrough,
}

/// A UTF-16 to UTF-8 encoder bound to a surrogate policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Encoder {
    policy: SurrogatePolicy,
}

impl Utf8Encoder {
    /// Create an encoder with the given policy.
    pub const fn new(policy: SurrogatePolicy) -> Self {
        Self { policy }
    }

    /// The policy applied to unpaired surrogates.
    pub const fn policy(&self) -> SurrogatePolicy {
        self.policy
    }

    /// Encode UTF-16 code units to UTF-8 bytes.
    pub fn encode(&self, units: &[u16]) -> Result<ByteBuffer, CoreError> {
        let mut out = Vec::with_capacity(units.len() * 3);
        for cp in CodePoints::new(units.iter().copied(), self.policy) {
            push_code_point(&mut out, cp?);
        }
        Ok(ByteBuffer::from(out))
    }

    /// Count the UTF-8 bytes `units` would encode to, without encoding them.
    pub fn byte_length(&self, units: &[u16]) -> Result<usize, CoreError> {
        CodePoints::new(units.iter().copied(), self.policy)
            .try_fold(0usize, |len, cp| Ok(len + encoded_len(cp?)))
    }
}

/// Encode a string to UTF-8 bytes.
///
/// A `&str` can never hold an unpaired surrogate, so this cannot fail and the
/// result always equals `text.as_bytes()`.
pub fn encode_utf8(text: &str) -> ByteBuffer {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        push_code_point(&mut out, c as u32);
    }
    ByteBuffer::from(out)
}

/// Encode UTF-16 code units to UTF-8 bytes under `policy`.
pub fn encode_utf16(units: &[u16], policy: SurrogatePolicy) -> Result<ByteBuffer, CoreError> {
    Utf8Encoder::new(policy).encode(units)
}

/// UTF-8 byte count of a string.
pub fn byte_length(text: &str) -> usize {
    text.chars().map(|c| encoded_len(c as u32)).sum()
}

/// UTF-8 byte count of UTF-16 code units under `policy`.
pub fn byte_length_utf16(units: &[u16], policy: SurrogatePolicy) -> Result<usize, CoreError> {
    Utf8Encoder::new(policy).byte_length(units)
}

/// Iterator pairing surrogates into code points.
///
/// Yields `u32` values rather than `char` because [`SurrogatePolicy::PassThrough`]
/// produces surrogate values, which are not valid scalar values.
struct CodePoints<I: Iterator<Item = u16>> {
    units: Peekable<I>,
    index: usize,
    policy: SurrogatePolicy,
}

impl<I: Iterator<Item = u16>> CodePoints<I> {
    fn new(units: I, policy: SurrogatePolicy) -> Self {
        Self {
            units: units.peekable(),
            index: 0,
            policy,
        }
    }

    fn unpaired(&self, index: usize, unit: u16) -> Result<u32, CoreError> {
        match self.policy {
            SurrogatePolicy::Replace => Ok(REPLACEMENT),
            SurrogatePolicy::Reject => Err(CoreError::MalformedSurrogate { index, unit }),
            SurrogatePolicy::PassThrough => Ok(u32::from(unit)),
        }
    }
}

impl<I: Iterator<Item = u16>> Iterator for CodePoints<I> {
    type Item = Result<u32, CoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.units.next()?;
        let index = self.index;
        self.index += 1;

        if HIGH_SURROGATES.contains(&unit) {
            if let Some(&low) = self.units.peek() {
                if LOW_SURROGATES.contains(&low) {
                    self.units.next();
                    self.index += 1;
                    let high = u32::from(unit & 0x3FF);
                    let low = u32::from(low & 0x3FF);
                    return Some(Ok(0x10000 + ((high << 10) | low)));
                }
            }
            return Some(self.unpaired(index, unit));
        }

        if LOW_SURROGATES.contains(&unit) {
            return Some(self.unpaired(index, unit));
        }

        Some(Ok(u32::from(unit)))
    }
}

fn encoded_len(cp: u32) -> usize {
    match cp {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    match cp {
        0..=0x7F => out.push(cp as u8),
        0x80..=0x7FF => out.extend_from_slice(&[
            0xC0 | (cp >> 6) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]),
        0x800..=0xFFFF => out.extend_from_slice(&[
            0xE0 | (cp >> 12) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]),
        _ => out.extend_from_slice(&[
            0xF0 | (cp >> 18) as u8,
            0x80 | ((cp >> 12) & 0x3F) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ]),
    }
}
