//! Resource stores: culture-scoped key to string tables.
//!
//! The resolver only talks to stores through [`ResourceStore`]. Two
//! implementations ship with the crate: [`MemoryStore`] for tables built in code
//! and [`FileStore`] for `.tolk` files on disk.

mod file;
mod memory;

use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::types::Culture;

/// A lookup table of strings per culture.
///
/// All lookups are exact: asking for `sv-SE` never falls back to `sv` or to
/// the invariant culture. Fallback is the resolver's job.
pub trait ResourceStore: Send + Sync {
    /// Name used in diagnostics, e.g. the resource set's base name.
    fn identity(&self) -> &str;

    /// Whether the store has any resources for `culture`.
    fn supports_culture(&self, culture: &Culture) -> bool;

    /// The string for `key` under exactly `culture`.
    fn get(&self, key: &str, culture: &Culture) -> Option<String>;

    /// Whether `key` exists under exactly `culture`.
    fn contains_key(&self, key: &str, culture: &Culture) -> bool {
        self.get(key, culture).is_some()
    }

    /// Every culture the store has resources for, ordered by name.
    fn cultures(&self) -> Vec<Culture>;

    /// Every key defined under exactly `culture`, sorted.
    fn keys(&self, culture: &Culture) -> Vec<String>;
}

impl<S: ResourceStore + ?Sized> ResourceStore for Arc<S> {
    fn identity(&self) -> &str {
        (**self).identity()
    }

    fn supports_culture(&self, culture: &Culture) -> bool {
        (**self).supports_culture(culture)
    }

    fn get(&self, key: &str, culture: &Culture) -> Option<String> {
        (**self).get(key, culture)
    }

    fn contains_key(&self, key: &str, culture: &Culture) -> bool {
        (**self).contains_key(key, culture)
    }

    fn cultures(&self) -> Vec<Culture> {
        (**self).cultures()
    }

    fn keys(&self, culture: &Culture) -> Vec<String> {
        (**self).keys(culture)
    }
}
