//! Code point argument syntax.
//!
//! Accepted forms:
//! - `U+1F600` / `u+1f600`
//! - `0x41`
//! - `65` (decimal)
//! - `A` (a single character that is not an ASCII digit)

use anyhow::{bail, Context, Result};

pub fn parse_code_point(arg: &str) -> Result<i64> {
    let hex = arg
        .strip_prefix("U+")
        .or_else(|| arg.strip_prefix("u+"))
        .or_else(|| arg.strip_prefix("0x"))
        .or_else(|| arg.strip_prefix("0X"));
    if let Some(digits) = hex {
        if digits.starts_with(|c: char| c == '+' || c == '-') {
            bail!("invalid hex code point: {}", arg);
        }
        return i64::from_str_radix(digits, 16)
            .with_context(|| format!("invalid hex code point: {}", arg));
    }

    if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        return arg
            .parse::<i64>()
            .with_context(|| format!("invalid decimal code point: {}", arg));
    }

    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c as i64),
        (None, _) => bail!("empty code point"),
        _ => bail!("expected U+XXXX, 0xXXXX, a decimal number or one character, got: {}", arg),
    }
}
