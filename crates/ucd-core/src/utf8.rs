//! UTF-8 encoding of a single code point.
//!
//! See: https://datatracker.ietf.org/doc/html/rfc3629
//!
//! | Range             | Layout                                |
//! |-------------------|---------------------------------------|
//! | U+0000..U+007F    | `0xxxxxxx`                            |
//! | U+0080..U+07FF    | `110xxxxx 10xxxxxx`                   |
//! | U+0800..U+FFFF    | `1110xxxx 10xxxxxx 10xxxxxx`          |
//! | U+10000..U+10FFFF | `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx` |

use std::fmt;
use std::ops::Deref;

use crate::error::{UcdError, UcdResult};

/// Largest Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

const SURROGATE_FIRST: u32 = 0xD800;
const SURROGATE_LAST: u32 = 0xDFFF;

/// Continuation byte: 10xxxxxx
#[inline]
fn tail(bits: u32) -> u8 {
    0x80 | (bits & 0x3F) as u8
}

/// Encode a code point into 1-4 bytes.
///
/// Negative values, values above U+10FFFF and surrogates are rejected.
pub fn encode(cp: i64) -> UcdResult<Utf8Char> {
    let c = u32::try_from(cp)
        .ok()
        .filter(|&c| c <= MAX_CODE_POINT && !(SURROGATE_FIRST..=SURROGATE_LAST).contains(&c))
        .ok_or(UcdError::InvalidEncodingInput(cp))?;

    let mut buf = [0u8; 4];
    let len = if c < 0x80 {
        buf[0] = c as u8;
        1
    } else if c < 0x800 {
        buf[0] = 0xC0 | (c >> 6) as u8;
        buf[1] = tail(c);
        2
    } else if c < 0x10000 {
        buf[0] = 0xE0 | (c >> 12) as u8;
        buf[1] = tail(c >> 6);
        buf[2] = tail(c);
        3
    } else {
        buf[0] = 0xF0 | ((c >> 18) & 0x07) as u8;
        buf[1] = tail(c >> 12);
        buf[2] = tail(c >> 6);
        buf[3] = tail(c);
        4
    };

    Ok(Utf8Char { buf, len })
}

/// Encode a code point into a one-character `String`.
pub fn encode_to_string(cp: i64) -> UcdResult<String> {
    encode(cp).map(|c| c.as_str().to_string())
}

/// The UTF-8 form of one code point. Only produced by [`encode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8Char {
    buf: [u8; 4],
    len: u8,
}

impl Utf8Char {
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: `encode` only emits well-formed sequences for scalar values.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

impl Deref for Utf8Char {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Utf8Char {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Utf8Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Utf8Char({:02X?})", self.as_bytes())
    }
}

impl fmt::Display for Utf8Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
