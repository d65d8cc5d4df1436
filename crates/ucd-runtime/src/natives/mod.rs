//! Native function implementations.

pub mod unicode;

use crate::native::NativeRegistry;

/// Register all native functions.
pub fn register_all(registry: &mut NativeRegistry) {
    unicode::register(registry);
}
