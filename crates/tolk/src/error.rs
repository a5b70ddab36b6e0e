//! Error types for translation and resource loading.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::types::Culture;

/// Errors that occur while loading resource files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a resource file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The same key appears twice for one culture.
    #[error("{path}:{line}: duplicate key '{key}'")]
    DuplicateKey {
        path: PathBuf,
        line: usize,
        key: String,
    },

    /// No file of the resource set exists in the directory.
    #[error("no resource files named '{base_name}' in '{directory}'")]
    MissingResources {
        directory: PathBuf,
        base_name: String,
    },
}

/// A gap or misuse detected while translating.
///
/// Every gap variant names the store and the offending key or culture so the
/// message is actionable on its own.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// Assigning a current culture that the catalog does not contain.
    #[error("can only set the current culture to one of the known cultures, got '{culture}' (known: {})", format_cultures(available))]
    InvalidCulture {
        culture: Culture,
        available: Vec<Culture>,
    },

    /// No resource store was provided.
    #[error("no resource store provided for key '{key}'")]
    MissingStore { key: String },

    /// The resource key is empty.
    #[error("resource key must not be empty")]
    InvalidKey,

    /// The store has no resources at all for the culture.
    #[error("the resource store {store} does not have a translation for the culture: {culture}")]
    UnsupportedCulture { store: String, culture: Culture },

    /// The key exists for the invariant culture but not for the requested one.
    #[error("the resource store {store} does not have a translation for the key: {key} for the culture: {culture}")]
    MissingTranslation {
        store: String,
        key: String,
        culture: Culture,
    },

    /// The key does not exist in the store.
    #[error("the resource store {store} does not have the key: {key}{}", format_suggestions(suggestions))]
    MissingKey {
        store: String,
        key: String,
        suggestions: Vec<String>,
    },
}

fn format_cultures(cultures: &[Culture]) -> String {
    if cultures.is_empty() {
        return "none".to_string();
    }
    cultures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for a mistyped key.
///
/// Returns at most three candidates within edit distance 1 (keys of up to three
/// characters) or 2 (longer keys), closest first and alphabetical among ties.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };

    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .filter(|candidate| candidate.as_str() != key)
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();

    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
