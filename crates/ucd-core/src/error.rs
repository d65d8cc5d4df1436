//! Query and encoding errors.

use thiserror::Error;

pub type UcdResult<T> = Result<T, UcdError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UcdError {
    /// Code point is negative or past the end of the property table.
    #[error("code point {cp} out of range (table covers 0..{len})")]
    OutOfRange { cp: i64, len: usize },

    /// Code point cannot be encoded: negative, above U+10FFFF, or a surrogate.
    #[error("invalid code point for UTF-8 encoding: {0}")]
    InvalidEncodingInput(i64),

    /// A record refers to a name table entry that does not exist.
    #[error("record {index} has {field} id {id}, but only {names} names exist")]
    DanglingIndex {
        index: usize,
        field: &'static str,
        id: u8,
        names: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = UcdError::OutOfRange { cp: -1, len: 0x110000 };
        assert_eq!(err.to_string(), "code point -1 out of range (table covers 0..1114112)");

        let err = UcdError::InvalidEncodingInput(0xD800);
        assert_eq!(err.to_string(), "invalid code point for UTF-8 encoding: 55296");
    }
}
