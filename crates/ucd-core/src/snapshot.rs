//! Full-range property table built from compiled Unicode data.
//!
//! Records for every code point in `0..=U+10FFFF` are generated once, on
//! first use, from ICU4X's compiled property tries. Display names come from
//! `unicode_names2`'s compressed name table, plus the code-point-derived
//! names of the ideograph ranges that table leaves out. A character the name
//! table does not know yet is recorded as unassigned, so the snapshot never
//! reports an assigned character without a name. After construction the
//! table is never written again, so any number of threads may read it.

use std::borrow::Cow;
use std::time::Instant;

use icu_properties::props::{
    BidiClass, BidiMirrored, CanonicalCombiningClass, GeneralCategory, Ideographic, Script,
    UnifiedIdeograph,
};
use icu_properties::{CodePointMapData, CodePointSetData};
use once_cell::sync::Lazy;

use crate::table::PropertyTable;
use crate::types::{BidiId, CategoryId, CharacterRecord};
use crate::utf8::MAX_CODE_POINT;

/// Number of code points covered by the snapshot.
pub const CODE_POINT_COUNT: usize = MAX_CODE_POINT as usize + 1;

/// General category short aliases, indexed by ICU4C `UCharCategory` value.
pub const GENERAL_CATEGORY_NAMES: [&str; 30] = [
    "Cn", "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Me", "Mc", "Nd", //
    "Nl", "No", "Zs", "Zl", "Zp", "Cc", "Cf", "Co", "Cs", "Pd", //
    "Ps", "Pe", "Pc", "Po", "Sm", "Sc", "Sk", "So", "Pi", "Pf", //
];

/// Bidi class short aliases, indexed by ICU4C `UCharDirection` value.
pub const BIDI_CLASS_NAMES: [&str; 23] = [
    "L", "R", "EN", "ES", "ET", "AN", "CS", "B", "S", "WS", "ON", "LRE", //
    "LRO", "AL", "RLE", "RLO", "PDF", "NSM", "BN", "FSI", "LRI", "RLI", "PDI", //
];

/// ON: stands in for bidi classes newer than `BIDI_CLASS_NAMES`.
const OTHER_NEUTRAL: u8 = 10;

/// Cn.
const UNASSIGNED: u8 = 0;

/// Categories whose characters carry no Name property.
const NAMELESS_CATEGORIES: [&str; 4] = ["Cn", "Cc", "Cs", "Co"];

/// Whether characters of `category` are expected to have a display name.
pub fn category_has_name(category: &str) -> bool {
    !NAMELESS_CATEGORIES.contains(&category)
}

/// Index into `BIDI_CLASS_NAMES`.
fn bidi_index(bidi: BidiClass) -> u8 {
    match bidi {
        BidiClass::LeftToRight => 0,
        BidiClass::RightToLeft => 1,
        BidiClass::EuropeanNumber => 2,
        BidiClass::EuropeanSeparator => 3,
        BidiClass::EuropeanTerminator => 4,
        BidiClass::ArabicNumber => 5,
        BidiClass::CommonSeparator => 6,
        BidiClass::ParagraphSeparator => 7,
        BidiClass::SegmentSeparator => 8,
        BidiClass::WhiteSpace => 9,
        BidiClass::OtherNeutral => 10,
        BidiClass::LeftToRightEmbedding => 11,
        BidiClass::LeftToRightOverride => 12,
        BidiClass::ArabicLetter => 13,
        BidiClass::RightToLeftEmbedding => 14,
        BidiClass::RightToLeftOverride => 15,
        BidiClass::PopDirectionalFormat => 16,
        BidiClass::NonspacingMark => 17,
        BidiClass::BoundaryNeutral => 18,
        BidiClass::FirstStrongIsolate => 19,
        BidiClass::LeftToRightIsolate => 20,
        BidiClass::RightToLeftIsolate => 21,
        BidiClass::PopDirectionalIsolate => 22,
        _ => OTHER_NEUTRAL,
    }
}

/// Prefix of a name formed as `PREFIX-XXXX` from the code point itself.
fn derived_name_prefix(c: char) -> Option<&'static str> {
    let ideographic = CodePointSetData::new::<Ideographic>().contains(c);
    let cp = c as u32;
    match CodePointMapData::<Script>::new().get(c) {
        Script::Han if CodePointSetData::new::<UnifiedIdeograph>().contains(c) => {
            Some("CJK UNIFIED IDEOGRAPH-")
        }
        Script::Han if ideographic => Some("CJK COMPATIBILITY IDEOGRAPH-"),
        // Tangut components are named by number, not code point.
        Script::Tangut if matches!(cp, 0x17000..=0x187FF | 0x18D00..=0x18D7F) => {
            Some("TANGUT IDEOGRAPH-")
        }
        Script::KhitanSmallScript => Some("KHITAN SMALL SCRIPT CHARACTER-"),
        Script::Nushu => Some("NUSHU CHARACTER-"),
        Script::EgyptianHieroglyphs if (0x13460..=0x143FF).contains(&cp) => {
            Some("EGYPTIAN HIEROGLYPH-")
        }
        _ => None,
    }
}

/// Display name of an assigned character, or `None` if no source knows it.
pub fn character_name(c: char) -> Option<String> {
    match unicode_names2::name(c) {
        Some(name) => Some(name.to_string()),
        None => derived_name_prefix(c).map(|prefix| format!("{}{:04X}", prefix, u32::from(c))),
    }
}

fn has_character_name(c: char) -> bool {
    unicode_names2::name(c).is_some() || derived_name_prefix(c).is_some()
}

static SHARED: Lazy<UnicodeTable> = Lazy::new(UnicodeTable::build);

/// The process-wide snapshot, built on first access.
pub fn shared() -> &'static UnicodeTable {
    &SHARED
}

pub struct UnicodeTable {
    records: Box<[CharacterRecord]>,
}

impl UnicodeTable {
    /// Generate a fresh snapshot. Prefer [`shared`], which builds it once.
    pub fn build() -> Self {
        let start = Instant::now();

        let categories = CodePointMapData::<GeneralCategory>::new();
        let combining = CodePointMapData::<CanonicalCombiningClass>::new();
        let bidis = CodePointMapData::<BidiClass>::new();
        let mirrored = CodePointSetData::new::<BidiMirrored>();

        let mut withdrawn = 0usize;
        let records: Box<[CharacterRecord]> = (0..=MAX_CODE_POINT)
            .map(|cp| {
                let category = categories.get32(cp) as u8;
                let bidi = bidi_index(bidis.get32(cp));
                let named = !category_has_name(GENERAL_CATEGORY_NAMES[category as usize])
                    || char::from_u32(cp).is_some_and(has_character_name);
                if !named {
                    // Newer than the name table: unassigned in its version.
                    withdrawn += 1;
                    return CharacterRecord::new(UNASSIGNED, 0, false, bidi);
                }
                CharacterRecord::new(
                    category,
                    combining.get32(cp).0,
                    mirrored.contains32(cp),
                    bidi,
                )
            })
            .collect();

        if withdrawn > 0 {
            log::debug!(
                "{} code points unknown to the name table recorded as unassigned",
                withdrawn
            );
        }
        log::debug!(
            "built UCD snapshot: {} code points in {:?}",
            records.len(),
            start.elapsed()
        );
        Self { records }
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }
}

impl PropertyTable for UnicodeTable {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn record_at(&self, index: usize) -> CharacterRecord {
        self.records[index]
    }

    fn category_name(&self, id: CategoryId) -> &str {
        GENERAL_CATEGORY_NAMES[id.index()]
    }

    fn bidi_name(&self, id: BidiId) -> &str {
        BIDI_CLASS_NAMES[id.index()]
    }

    fn display_name_at(&self, index: usize) -> Cow<'_, str> {
        if !category_has_name(self.category_name(self.records[index].category)) {
            return Cow::Borrowed("");
        }
        u32::try_from(index)
            .ok()
            .and_then(char::from_u32)
            .and_then(character_name)
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_are_well_formed() {
        for name in GENERAL_CATEGORY_NAMES {
            assert_eq!(name.len(), 2);
            assert!(crate::MajorClass::of(name).is_some(), "{name}");
        }
    }

    #[test]
    fn test_icu_value_order() {
        assert_eq!(GENERAL_CATEGORY_NAMES[GeneralCategory::UppercaseLetter as usize], "Lu");
        assert_eq!(GENERAL_CATEGORY_NAMES[GeneralCategory::SpacingMark as usize], "Mc");
        assert_eq!(GENERAL_CATEGORY_NAMES[GeneralCategory::MathSymbol as usize], "Sm");
        assert_eq!(GENERAL_CATEGORY_NAMES[GeneralCategory::FinalPunctuation as usize], "Pf");
        assert_eq!(GENERAL_CATEGORY_NAMES[UNASSIGNED as usize], "Cn");
        assert_eq!(BIDI_CLASS_NAMES[bidi_index(BidiClass::ArabicLetter) as usize], "AL");
        assert_eq!(BIDI_CLASS_NAMES[bidi_index(BidiClass::PopDirectionalIsolate) as usize], "PDI");
        assert_eq!(BIDI_CLASS_NAMES[bidi_index(BidiClass::OtherNeutral) as usize], "ON");
    }

    #[test]
    fn test_nameless_categories() {
        for name in ["Cn", "Cc", "Cs", "Co"] {
            assert!(!category_has_name(name));
        }
        assert!(category_has_name("Lo"));
        assert!(category_has_name("Cf"));
    }

    #[test]
    fn test_derived_names() {
        // Ideograph ranges are named after the code point.
        assert_eq!(character_name('\u{4E00}').as_deref(), Some("CJK UNIFIED IDEOGRAPH-4E00"));
        assert_eq!(character_name('\u{17000}').as_deref(), Some("TANGUT IDEOGRAPH-17000"));
        assert_eq!(character_name('A').as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(character_name('\u{0}'), None);
    }

    #[test]
    fn test_assigned_characters_have_names() {
        let table = shared();
        for (cp, rec) in table.records().iter().enumerate() {
            let category = table.category_name(rec.category);
            if category_has_name(category) {
                assert!(!table.display_name_at(cp).is_empty(), "U+{cp:04X} ({category})");
            }
        }
    }

    #[test]
    fn test_shared_is_built_once() {
        let a = shared();
        let b = shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), CODE_POINT_COUNT);
    }

    #[test]
    fn test_records_reference_known_names() {
        let table = shared();
        for rec in table.records() {
            assert!(rec.category.index() < GENERAL_CATEGORY_NAMES.len());
            assert!(rec.bidirectional.index() < BIDI_CLASS_NAMES.len());
        }
    }
}
