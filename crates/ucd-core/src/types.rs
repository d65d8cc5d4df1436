//! Record types stored in a property table.

use num_enum::TryFromPrimitive;

/// Flag byte for a mirrored character.
pub const MIRRORED_YES: u8 = b'Y';
/// Flag byte for a non-mirrored character.
pub const MIRRORED_NO: u8 = b'N';

/// Index into a table's category name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryId(pub u8);

impl CategoryId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index into a table's bidirectional class name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BidiId(pub u8);

impl BidiId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Properties of one code point, as laid out in the generated table.
///
/// `mirrored` keeps the table's flag byte (`b'Y'` / `b'N'`) rather than a
/// `bool` so generated data can be embedded as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterRecord {
    pub category: CategoryId,
    pub combining: u8,
    pub mirrored: u8,
    pub bidirectional: BidiId,
}

impl CharacterRecord {
    pub const fn new(category: u8, combining: u8, mirrored: bool, bidirectional: u8) -> Self {
        Self {
            category: CategoryId(category),
            combining,
            mirrored: if mirrored { MIRRORED_YES } else { MIRRORED_NO },
            bidirectional: BidiId(bidirectional),
        }
    }

    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.mirrored == MIRRORED_YES
    }
}

/// Major class of a general category: the first letter of its abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum MajorClass {
    Other = 0x43,       // 'C'
    Letter = 0x4C,      // 'L'
    Mark = 0x4D,        // 'M'
    Number = 0x4E,      // 'N'
    Punctuation = 0x50, // 'P'
    Symbol = 0x53,      // 'S'
    Separator = 0x5A,   // 'Z'
}

impl MajorClass {
    /// Major class of a category abbreviation such as `"Lu"` or `"Zs"`.
    pub fn of(category: &str) -> Option<Self> {
        category.bytes().next().and_then(|b| Self::try_from(b).ok())
    }

    /// The one-letter matcher selecting this class.
    #[inline]
    pub fn letter(self) -> char {
        self as u8 as char
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Other => "C",
            Self::Letter => "L",
            Self::Mark => "M",
            Self::Number => "N",
            Self::Punctuation => "P",
            Self::Symbol => "S",
            Self::Separator => "Z",
        }
    }
}
