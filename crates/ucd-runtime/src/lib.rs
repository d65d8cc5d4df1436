//! Runtime binding for the UCD query core.
//!
//! The core (`ucd-core`) only speaks integer code points. This crate is the
//! boundary a host runtime calls through:
//!
//! ```text
//! host call ──▶ NativeRegistry ──▶ natives::unicode ──▶ ucd_core::Ucd
//!     ▲                                   │
//!     └──────────── Value ◀───────────────┘
//! ```

pub mod native;
pub mod natives;

pub use native::{NativeCtx, NativeError, NativeFn, NativeRegistry, NativeResult, Value};

use once_cell::sync::Lazy;

static UNICODE_MODULE: Lazy<NativeRegistry> = Lazy::new(|| {
    let mut registry = NativeRegistry::new();
    natives::register_all(&mut registry);
    registry
});

/// The `unicode` module, built on first use and shared afterwards.
pub fn unicode_module() -> &'static NativeRegistry {
    &UNICODE_MODULE
}
