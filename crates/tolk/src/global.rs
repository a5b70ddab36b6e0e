//! Process-wide translator for the `global-translator` feature.
//!
//! Provides a shared [`Translator`] for hosts that prefer free functions over
//! passing a translator around. The instance is created on first use from
//! [`TranslatorConfig::from_process`].

use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use crate::error::TranslationError;
use crate::store::ResourceStore;
use crate::translator::{Translator, TranslatorConfig};
use crate::types::{Culture, ErrorHandling};

static GLOBAL_TRANSLATOR: LazyLock<Arc<Translator>> =
    LazyLock::new(|| Arc::new(Translator::new(TranslatorConfig::from_process())));

/// The shared translator.
pub fn translator() -> Arc<Translator> {
    Arc::clone(&GLOBAL_TRANSLATOR)
}

/// Translate `key` with the shared translator's current culture and policy.
pub fn translate(store: &dyn ResourceStore, key: &str) -> Result<String, TranslationError> {
    GLOBAL_TRANSLATOR.translate(Some(store), key)
}

/// Translate `key` with an explicit policy.
pub fn translate_with(
    store: &dyn ResourceStore,
    key: &str,
    error_handling: ErrorHandling,
) -> Result<String, TranslationError> {
    GLOBAL_TRANSLATOR.translate_with(Some(store), key, error_handling)
}

pub fn current_culture() -> Option<Culture> {
    GLOBAL_TRANSLATOR.current_culture()
}

pub fn set_current_culture(culture: Option<Culture>) -> Result<(), TranslationError> {
    GLOBAL_TRANSLATOR.set_current_culture(culture)
}

pub fn error_handling() -> ErrorHandling {
    GLOBAL_TRANSLATOR.error_handling()
}

pub fn set_error_handling(error_handling: ErrorHandling) {
    GLOBAL_TRANSLATOR.set_error_handling(error_handling);
}

/// Point the shared translator at a new resource directory.
pub fn set_resource_directory(directory: Option<PathBuf>) {
    GLOBAL_TRANSLATOR.set_resource_directory(directory);
}
