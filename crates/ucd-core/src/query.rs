//! Classification queries over a property table.
//!
//! Every query takes the host's integer code point and fails with
//! `UcdError::OutOfRange` instead of reading past the table.

use std::borrow::Cow;

use crate::error::UcdResult;
use crate::table::PropertyTable;
use crate::types::MajorClass;
use crate::utf8::{self, Utf8Char};

/// Query engine over an injected, read-only table.
#[derive(Debug, Clone, Copy)]
pub struct Ucd<T> {
    table: T,
}

/// Every property of one code point.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterProperties<'a> {
    pub code_point: u32,
    pub name: Cow<'a, str>,
    pub category: &'a str,
    pub bidirectional: &'a str,
    pub combining: u8,
    pub mirrored: bool,
    /// `None` for surrogates, which have no UTF-8 form.
    pub utf8: Option<Utf8Char>,
}

#[cfg(feature = "compiled-data")]
impl Ucd<&'static crate::snapshot::UnicodeTable> {
    /// Engine over the process-wide compiled snapshot.
    pub fn shared() -> Self {
        Self::new(crate::snapshot::shared())
    }
}

impl<T: PropertyTable> Ucd<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn name(&self, cp: i64) -> UcdResult<Cow<'_, str>> {
        self.table.display_name(cp)
    }

    pub fn category(&self, cp: i64) -> UcdResult<&str> {
        let rec = self.table.lookup(cp)?;
        Ok(self.table.category_name(rec.category))
    }

    pub fn combining_class(&self, cp: i64) -> UcdResult<u8> {
        Ok(self.table.lookup(cp)?.combining)
    }

    /// Combining class as a host number.
    pub fn combining(&self, cp: i64) -> UcdResult<f64> {
        self.combining_class(cp).map(f64::from)
    }

    pub fn mirrored(&self, cp: i64) -> UcdResult<bool> {
        Ok(self.table.lookup(cp)?.is_mirrored())
    }

    pub fn bidirectional(&self, cp: i64) -> UcdResult<&str> {
        let rec = self.table.lookup(cp)?;
        Ok(self.table.bidi_name(rec.bidirectional))
    }

    /// True if `matcher` is the full category (`"Lu"`) or its major class
    /// letter (`"L"`).
    pub fn is_category(&self, cp: i64, matcher: &str) -> UcdResult<bool> {
        let category = self.category(cp)?;
        Ok(category_matches(category, matcher))
    }

    pub fn is_separator(&self, cp: i64) -> UcdResult<bool> {
        self.is_category(cp, "Z")
    }

    pub fn is_control(&self, cp: i64) -> UcdResult<bool> {
        self.is_category(cp, "C")
    }

    pub fn is_letter(&self, cp: i64) -> UcdResult<bool> {
        self.is_category(cp, "L")
    }

    pub fn is_number(&self, cp: i64) -> UcdResult<bool> {
        self.is_category(cp, "N")
    }

    /// `Sm` is a subtype, so there is no one-letter shortcut here.
    pub fn is_symbol_mathematical(&self, cp: i64) -> UcdResult<bool> {
        Ok(self.category(cp)? == "Sm")
    }

    pub fn major_class(&self, cp: i64) -> UcdResult<Option<MajorClass>> {
        self.category(cp).map(MajorClass::of)
    }

    pub fn properties(&self, cp: i64) -> UcdResult<CharacterProperties<'_>> {
        let index = self.table.index_of(cp)?;
        let rec = self.table.record_at(index);
        Ok(CharacterProperties {
            code_point: index as u32,
            name: self.table.display_name_at(index),
            category: self.table.category_name(rec.category),
            bidirectional: self.table.bidi_name(rec.bidirectional),
            combining: rec.combining,
            mirrored: rec.is_mirrored(),
            utf8: utf8::encode(cp).ok(),
        })
    }
}

fn category_matches(category: &str, matcher: &str) -> bool {
    let mut chars = matcher.chars();
    let major = match (chars.next(), chars.next()) {
        (Some(letter), None) => category.starts_with(letter),
        _ => false,
    };
    major || category == matcher
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CharacterRecord, StaticTable, UcdError};

    const CATEGORIES: &[&str] = &["Cn", "Lu", "Ll", "Nd", "Zs", "Cc", "Sm", "Mn", "Ps"];
    const BIDIS: &[&str] = &["L", "EN", "WS", "ON", "NSM", "BN"];

    // 0..=8: NUL, A, a, 1, space, plus, acute, paren, unassigned
    const RECORDS: &[CharacterRecord] = &[
        CharacterRecord::new(5, 0, false, 5),
        CharacterRecord::new(1, 0, false, 0),
        CharacterRecord::new(2, 0, false, 0),
        CharacterRecord::new(3, 0, false, 1),
        CharacterRecord::new(4, 0, false, 2),
        CharacterRecord::new(6, 0, false, 3),
        CharacterRecord::new(7, 230, false, 4),
        CharacterRecord::new(8, 0, true, 3),
        CharacterRecord::new(0, 0, false, 0),
    ];

    const NAMES: &[&str] = &[
        "",
        "FAKE CAPITAL A",
        "FAKE SMALL A",
        "FAKE DIGIT ONE",
        "FAKE SPACE",
        "FAKE PLUS",
        "FAKE ACUTE",
        "FAKE PAREN",
    ];

    fn ucd() -> Ucd<StaticTable<'static>> {
        Ucd::new(StaticTable::new(RECORDS, CATEGORIES, BIDIS, NAMES).unwrap())
    }

    #[test]
    fn test_basic_queries() {
        let ucd = ucd();
        assert_eq!(ucd.category(1).unwrap(), "Lu");
        assert_eq!(ucd.bidirectional(3).unwrap(), "EN");
        assert_eq!(ucd.name(1).unwrap(), "FAKE CAPITAL A");
        assert_eq!(ucd.combining(6).unwrap(), 230.0);
        assert_eq!(ucd.combining_class(1).unwrap(), 0);
        assert!(ucd.mirrored(7).unwrap());
        assert!(!ucd.mirrored(1).unwrap());
    }

    #[test]
    fn test_unnamed_is_empty_not_error() {
        let ucd = ucd();
        assert_eq!(ucd.name(8).unwrap(), "");
        assert_eq!(ucd.name(0).unwrap(), "");
    }

    #[test]
    fn test_out_of_range() {
        let ucd = ucd();
        let len = RECORDS.len();
        for cp in [-1, len as i64] {
            let err = UcdError::OutOfRange { cp, len };
            assert_eq!(ucd.category(cp), Err(err.clone()));
            assert_eq!(ucd.name(cp), Err(err.clone()));
            assert_eq!(ucd.combining(cp), Err(err.clone()));
            assert_eq!(ucd.mirrored(cp), Err(err.clone()));
            assert_eq!(ucd.bidirectional(cp), Err(err.clone()));
            assert_eq!(ucd.is_category(cp, "L"), Err(err.clone()));
            assert_eq!(ucd.is_symbol_mathematical(cp), Err(err));
        }
    }

    #[test]
    fn test_is_category_full_and_major() {
        let ucd = ucd();
        assert!(ucd.is_category(1, "Lu").unwrap());
        assert!(ucd.is_category(1, "L").unwrap());
        assert!(!ucd.is_category(1, "Ll").unwrap());
        assert!(!ucd.is_category(1, "N").unwrap());
        // A two-letter matcher is never treated as a major class.
        assert!(!ucd.is_category(1, "Lx").unwrap());
        assert!(!ucd.is_category(1, "").unwrap());
        assert!(!ucd.is_category(1, "Lu ").unwrap());
    }

    #[test]
    fn test_major_class_predicates() {
        let ucd = ucd();
        assert!(ucd.is_control(0).unwrap());
        assert!(ucd.is_letter(1).unwrap());
        assert!(ucd.is_letter(2).unwrap());
        assert!(ucd.is_number(3).unwrap());
        assert!(ucd.is_separator(4).unwrap());
        // Unassigned (Cn) is in the C major class.
        assert!(ucd.is_control(8).unwrap());
        assert!(!ucd.is_letter(4).unwrap());
    }

    #[test]
    fn test_symbol_mathematical() {
        let ucd = ucd();
        assert!(ucd.is_symbol_mathematical(5).unwrap());
        assert!(!ucd.is_symbol_mathematical(7).unwrap());
        assert!(!ucd.is_symbol_mathematical(1).unwrap());
    }

    #[test]
    fn test_self_consistency() {
        let ucd = ucd();
        for cp in 0..RECORDS.len() as i64 {
            let category = ucd.category(cp).unwrap();
            assert!(CATEGORIES.iter().any(|c| *c == category));
            assert!(ucd.is_category(cp, category).unwrap());
            assert!(ucd.is_category(cp, &category[..1]).unwrap());
            assert_eq!(ucd.is_letter(cp).unwrap(), ucd.is_category(cp, "L").unwrap());
            assert_eq!(ucd.is_separator(cp).unwrap(), ucd.is_category(cp, "Z").unwrap());
            assert_eq!(ucd.is_control(cp).unwrap(), ucd.is_category(cp, "C").unwrap());
            assert_eq!(ucd.is_number(cp).unwrap(), ucd.is_category(cp, "N").unwrap());
            assert_eq!(ucd.is_symbol_mathematical(cp).unwrap(), category == "Sm");
        }
    }

    #[test]
    fn test_major_class() {
        let ucd = ucd();
        assert_eq!(ucd.major_class(1).unwrap(), Some(MajorClass::Letter));
        assert_eq!(ucd.major_class(6).unwrap(), Some(MajorClass::Mark));
        assert_eq!(ucd.major_class(7).unwrap(), Some(MajorClass::Punctuation));
    }

    #[test]
    fn test_properties() {
        let ucd = ucd();
        let props = ucd.properties(7).unwrap();
        assert_eq!(props.code_point, 7);
        assert_eq!(props.name, "FAKE PAREN");
        assert_eq!(props.category, "Ps");
        assert_eq!(props.bidirectional, "ON");
        assert_eq!(props.combining, 0);
        assert!(props.mirrored);
        assert_eq!(props.utf8.map(|u| u.len()), Some(1));
        assert!(ucd.properties(9).is_err());
    }
}
