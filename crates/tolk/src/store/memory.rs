use std::collections::BTreeMap;

use crate::store::ResourceStore;
use crate::types::Culture;

/// A resource store held entirely in memory.
///
/// A culture counts as supported as soon as it has a table, even an empty one.
///
/// # Example
///
/// ```
/// use tolk::{Culture, MemoryStore, ResourceStore};
///
/// let en: Culture = "en".parse().unwrap();
/// let store = MemoryStore::new("Resources")
///     .with(Culture::invariant(), "Greeting", "Hello")
///     .with(en.clone(), "Greeting", "Hello!");
///
/// assert_eq!(store.get("Greeting", &en).as_deref(), Some("Hello!"));
/// assert!(!store.supports_culture(&"sv".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    identity: String,
    tables: BTreeMap<Culture, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            tables: BTreeMap::new(),
        }
    }

    /// Add a string, consuming and returning the store.
    pub fn with(
        mut self,
        culture: Culture,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(culture, key, value);
        self
    }

    /// Mark `culture` as supported without adding any strings.
    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.tables.entry(culture).or_default();
        self
    }

    /// Add or replace a string. Returns the previous value, if any.
    pub fn insert(
        &mut self,
        culture: Culture,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.tables
            .entry(culture)
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Drop every string of `culture`, making it unsupported.
    pub fn remove_culture(&mut self, culture: &Culture) -> bool {
        self.tables.remove(culture).is_some()
    }

    /// Total number of strings across all cultures.
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceStore for MemoryStore {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn supports_culture(&self, culture: &Culture) -> bool {
        self.tables.contains_key(culture)
    }

    fn get(&self, key: &str, culture: &Culture) -> Option<String> {
        self.tables.get(culture)?.get(key).cloned()
    }

    fn contains_key(&self, key: &str, culture: &Culture) -> bool {
        self.tables
            .get(culture)
            .is_some_and(|table| table.contains_key(key))
    }

    fn cultures(&self) -> Vec<Culture> {
        self.tables.keys().cloned().collect()
    }

    fn keys(&self, culture: &Culture) -> Vec<String> {
        self.tables
            .get(culture)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default()
    }
}
