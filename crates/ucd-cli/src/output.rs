//! Text formatting for query results.

use ucd_core::CharacterProperties;

/// Bytes as space-separated uppercase hex pairs.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per code point:
/// `U+0041  Lu  L  0  N  41  LATIN CAPITAL LETTER A`
pub fn format_properties(props: &CharacterProperties<'_>) -> String {
    let utf8 = props
        .utf8
        .map(|u| format_bytes(&u))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "U+{:04X}\t{}\t{}\t{}\t{}\t{}\t{}",
        props.code_point,
        props.category,
        props.bidirectional,
        props.combining,
        if props.mirrored { 'Y' } else { 'N' },
        utf8,
        props.name,
    )
}
