//! Property table access.
//!
//! A `PropertyTable` is a dense, read-only array of `CharacterRecord`s
//! indexed by code point, plus the name tables the records point into.
//! Implementations only answer for indices they have already been handed
//! through `index_of`; range checking lives in the provided methods.

use std::borrow::Cow;

use crate::error::{UcdError, UcdResult};
use crate::types::{BidiId, CategoryId, CharacterRecord};

pub trait PropertyTable {
    /// Number of code points covered, starting at U+0000.
    fn len(&self) -> usize;

    /// Record at a validated index.
    fn record_at(&self, index: usize) -> CharacterRecord;

    fn category_name(&self, id: CategoryId) -> &str;

    fn bidi_name(&self, id: BidiId) -> &str;

    /// Display name at a validated index; empty when the code point has none.
    fn display_name_at(&self, index: usize) -> Cow<'_, str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate a host code point as an index into this table.
    fn index_of(&self, cp: i64) -> UcdResult<usize> {
        let len = self.len();
        usize::try_from(cp)
            .ok()
            .filter(|&index| index < len)
            .ok_or(UcdError::OutOfRange { cp, len })
    }

    fn lookup(&self, cp: i64) -> UcdResult<CharacterRecord> {
        let index = self.index_of(cp)?;
        Ok(self.record_at(index))
    }

    fn display_name(&self, cp: i64) -> UcdResult<Cow<'_, str>> {
        let index = self.index_of(cp)?;
        Ok(self.display_name_at(index))
    }
}

impl<T: PropertyTable + ?Sized> PropertyTable for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn record_at(&self, index: usize) -> CharacterRecord {
        (**self).record_at(index)
    }

    fn category_name(&self, id: CategoryId) -> &str {
        (**self).category_name(id)
    }

    fn bidi_name(&self, id: BidiId) -> &str {
        (**self).bidi_name(id)
    }

    fn display_name_at(&self, index: usize) -> Cow<'_, str> {
        (**self).display_name_at(index)
    }
}

/// A table over borrowed, pre-generated slices.
///
/// `names` may be shorter than `records`; code points past its end have no
/// display name.
#[derive(Debug, Clone, Copy)]
pub struct StaticTable<'a> {
    records: &'a [CharacterRecord],
    categories: &'a [&'a str],
    bidis: &'a [&'a str],
    names: &'a [&'a str],
}

impl<'a> StaticTable<'a> {
    /// Build a table, rejecting records whose ids fall outside the name lists.
    pub fn new(
        records: &'a [CharacterRecord],
        categories: &'a [&'a str],
        bidis: &'a [&'a str],
        names: &'a [&'a str],
    ) -> UcdResult<Self> {
        for (index, rec) in records.iter().enumerate() {
            if rec.category.index() >= categories.len() {
                return Err(UcdError::DanglingIndex {
                    index,
                    field: "category",
                    id: rec.category.0,
                    names: categories.len(),
                });
            }
            if rec.bidirectional.index() >= bidis.len() {
                return Err(UcdError::DanglingIndex {
                    index,
                    field: "bidirectional",
                    id: rec.bidirectional.0,
                    names: bidis.len(),
                });
            }
        }
        Ok(Self {
            records,
            categories,
            bidis,
            names,
        })
    }

    pub fn records(&self) -> &'a [CharacterRecord] {
        self.records
    }

    pub fn category_names(&self) -> &'a [&'a str] {
        self.categories
    }

    pub fn bidi_names(&self) -> &'a [&'a str] {
        self.bidis
    }
}

impl PropertyTable for StaticTable<'_> {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn record_at(&self, index: usize) -> CharacterRecord {
        self.records[index]
    }

    fn category_name(&self, id: CategoryId) -> &str {
        self.categories[id.index()]
    }

    fn bidi_name(&self, id: BidiId) -> &str {
        self.bidis[id.index()]
    }

    fn display_name_at(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.names.get(index).copied().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: &[&str] = &["Cn", "Lu", "Zs"];
    const BIDIS: &[&str] = &["L", "WS"];
    const RECORDS: &[CharacterRecord] = &[
        CharacterRecord::new(0, 0, false, 0),
        CharacterRecord::new(1, 0, false, 0),
        CharacterRecord::new(2, 0, false, 1),
    ];
    const NAMES: &[&str] = &["", "TEST LETTER"];

    fn table() -> StaticTable<'static> {
        StaticTable::new(RECORDS, CATEGORIES, BIDIS, NAMES).unwrap()
    }

    #[test]
    fn test_lookup_in_range() {
        let t = table();
        assert_eq!(t.len(), 3);
        assert_eq!(t.lookup(1).unwrap(), RECORDS[1]);
        assert_eq!(t.category_name(t.lookup(2).unwrap().category), "Zs");
        assert_eq!(t.bidi_name(t.lookup(2).unwrap().bidirectional), "WS");
    }

    #[test]
    fn test_lookup_out_of_range() {
        let t = table();
        assert_eq!(t.lookup(-1), Err(UcdError::OutOfRange { cp: -1, len: 3 }));
        assert_eq!(t.lookup(3), Err(UcdError::OutOfRange { cp: 3, len: 3 }));
        assert_eq!(t.lookup(i64::MAX), Err(UcdError::OutOfRange { cp: i64::MAX, len: 3 }));
        assert!(t.display_name(3).is_err());
    }

    #[test]
    fn test_display_name_absent() {
        let t = table();
        assert_eq!(t.display_name(1).unwrap(), "TEST LETTER");
        // Covered by `names` but empty.
        assert_eq!(t.display_name(0).unwrap(), "");
        // Past the end of `names`.
        assert_eq!(t.display_name(2).unwrap(), "");
    }

    #[test]
    fn test_dangling_category() {
        let records = [CharacterRecord::new(3, 0, false, 0)];
        let err = StaticTable::new(&records, CATEGORIES, BIDIS, NAMES).unwrap_err();
        assert_eq!(
            err,
            UcdError::DanglingIndex { index: 0, field: "category", id: 3, names: 3 }
        );
    }

    #[test]
    fn test_dangling_bidi() {
        let records = [
            CharacterRecord::new(0, 0, false, 0),
            CharacterRecord::new(0, 0, false, 2),
        ];
        let err = StaticTable::new(&records, CATEGORIES, BIDIS, NAMES).unwrap_err();
        assert_eq!(
            err,
            UcdError::DanglingIndex { index: 1, field: "bidirectional", id: 2, names: 2 }
        );
    }

    #[test]
    fn test_empty_table() {
        let t = StaticTable::new(&[], CATEGORIES, BIDIS, &[]).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.lookup(0), Err(UcdError::OutOfRange { cp: 0, len: 0 }));
    }
}
