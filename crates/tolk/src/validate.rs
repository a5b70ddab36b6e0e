//! Detection of translation gaps across cultures.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use crate::store::ResourceStore;
use crate::types::Culture;

/// A gap between a culture's strings and the invariant strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationWarning {
    /// The invariant culture has the key but `culture` does not.
    MissingTranslation { key: String, culture: Culture },
    /// `culture` has a key that the invariant culture does not.
    UnknownKey { key: String, culture: Culture },
}

impl ValidationWarning {
    pub fn key(&self) -> &str {
        match self {
            ValidationWarning::MissingTranslation { key, .. }
            | ValidationWarning::UnknownKey { key, .. } => key,
        }
    }

    pub fn culture(&self) -> &Culture {
        match self {
            ValidationWarning::MissingTranslation { culture, .. }
            | ValidationWarning::UnknownKey { culture, .. } => culture,
        }
    }
}

impl Display for ValidationWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::MissingTranslation { key, culture } => {
                write!(f, "missing translation for '{key}' in {culture}")
            }
            ValidationWarning::UnknownKey { key, culture } => {
                write!(f, "'{key}' in {culture} has no invariant entry")
            }
        }
    }
}

/// Compare each culture in `cultures` against the store's invariant strings.
///
/// A culture the store does not support at all is missing every key. The
/// invariant culture itself is skipped. Warnings are sorted by kind, then key,
/// then culture.
///
/// # Example
///
/// ```
/// use tolk::{Culture, MemoryStore, ValidationWarning, validate_translations};
///
/// let sv = Culture::parse("sv").unwrap();
/// let store = MemoryStore::new("Resources")
///     .with(Culture::invariant(), "Greeting", "Hello")
///     .with(sv.clone(), "Farewell", "Hej då");
///
/// let warnings = validate_translations(&store, &[sv]);
/// assert_eq!(warnings.len(), 2);
/// ```
pub fn validate_translations(
    store: &dyn ResourceStore,
    cultures: &[Culture],
) -> Vec<ValidationWarning> {
    let invariant_keys: BTreeSet<String> = store.keys(&Culture::invariant()).into_iter().collect();
    let mut warnings = Vec::new();

    for culture in cultures.iter().filter(|culture| !culture.is_invariant()) {
        let culture_keys: BTreeSet<String> = store.keys(culture).into_iter().collect();

        warnings.extend(invariant_keys.difference(&culture_keys).map(|key| {
            ValidationWarning::MissingTranslation {
                key: key.clone(),
                culture: culture.clone(),
            }
        }));
        warnings.extend(culture_keys.difference(&invariant_keys).map(|key| {
            ValidationWarning::UnknownKey {
                key: key.clone(),
                culture: culture.clone(),
            }
        }));
    }

    warnings.sort();
    warnings.dedup();
    warnings
}
