//! The set of cultures known to have resource data.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::scan::resource_cultures;
use crate::types::Culture;

/// Ordered, deduplicated set of cultures with resource data.
///
/// The catalog is built from a directory scan and may grow afterwards when a
/// store turns out to support a culture the scan missed. All operations take
/// `&self` and are safe to call from many threads; each one sees the set either
/// before or after a concurrent update, never in between.
#[derive(Debug, Default)]
pub struct CultureCatalog {
    cultures: RwLock<BTreeSet<Culture>>,
}

impl CultureCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog by scanning `directory` for resource files.
    ///
    /// `None`, a missing directory or an unreadable one all give an empty
    /// catalog.
    pub fn build(directory: Option<&Path>) -> Self {
        let cultures = directory.map(resource_cultures).unwrap_or_default();
        Self {
            cultures: RwLock::new(cultures),
        }
    }

    /// Replace the contents with a fresh scan of `directory`.
    pub fn rebuild(&self, directory: Option<&Path>) {
        let cultures = directory.map(resource_cultures).unwrap_or_default();
        *self.write() = cultures;
    }

    pub fn contains(&self, culture: &Culture) -> bool {
        self.read().contains(culture)
    }

    /// Register a culture. Returns `true` if it was not already present.
    ///
    /// The invariant culture is never a member; adding it returns `false`.
    pub fn add(&self, culture: Culture) -> bool {
        if culture.is_invariant() {
            return false;
        }
        self.write().insert(culture)
    }

    /// Snapshot of every culture, ordered by name.
    pub fn cultures(&self) -> Vec<Culture> {
        self.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Find the member that best matches `culture`.
    ///
    /// An exact member wins; otherwise the first member (by name) with the same
    /// primary language.
    pub fn best_match(&self, culture: &Culture) -> Option<Culture> {
        let cultures = self.read();
        if cultures.contains(culture) {
            return Some(culture.clone());
        }
        cultures
            .iter()
            .find(|candidate| candidate.same_language(culture))
            .cloned()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeSet<Culture>> {
        self.cultures.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<Culture>> {
        self.cultures.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FromIterator<Culture> for CultureCatalog {
    fn from_iter<I: IntoIterator<Item = Culture>>(iter: I) -> Self {
        Self {
            cultures: RwLock::new(
                iter.into_iter()
                    .filter(|culture| !culture.is_invariant())
                    .collect(),
            ),
        }
    }
}
