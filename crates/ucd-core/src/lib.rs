//! # ucd-core
//!
//! Per-code-point Unicode Character Database queries.
//!
//! This crate holds the pure logic, independent of any calling convention:
//! - `PropertyTable` - read-only per-code-point records plus name tables
//! - `Ucd` - classification queries over an injected table
//! - `utf8` - single code point UTF-8 encoder
//!
//! Host runtimes (see `ucd-runtime`) reduce their own values to an `i64`
//! code point before calling in, and box the returned strings, booleans and
//! numbers themselves.
//!
//! ```text
//! host value ──ord──▶ i64 ──▶ Ucd ──▶ PropertyTable
//!                       └───▶ utf8::encode
//! ```

mod error;
mod query;
mod table;
mod types;

pub mod utf8;

#[cfg(feature = "compiled-data")]
pub mod snapshot;

pub use error::{UcdError, UcdResult};
pub use query::{CharacterProperties, Ucd};
pub use table::{PropertyTable, StaticTable};
pub use types::{BidiId, CategoryId, CharacterRecord, MajorClass, MIRRORED_NO, MIRRORED_YES};
pub use utf8::{encode, encode_to_string, Utf8Char, MAX_CODE_POINT};

#[cfg(feature = "compiled-data")]
pub use snapshot::{shared, UnicodeTable};
