//! Lazily re-evaluated translations.

use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use crate::error::TranslationError;
use crate::store::ResourceStore;
use crate::translator::Translator;
use crate::types::{Culture, ErrorHandling, ResolvedErrorHandling};

/// A (store, key) pair that resolves against the translator's current culture
/// every time it is read.
///
/// Nothing is cached between reads, so a handle kept in a view model follows
/// culture changes without re-subscribing. Obtain shared handles through
/// [`Translator::get_or_create_translation`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tolk::{Culture, MemoryStore, ResourceStore, Translator, TranslatorConfig};
///
/// let en = Culture::parse("en").unwrap();
/// let sv = Culture::parse("sv").unwrap();
/// let store: Arc<dyn ResourceStore> = Arc::new(
///     MemoryStore::new("Resources")
///         .with(en.clone(), "Greeting", "Hello")
///         .with(sv.clone(), "Greeting", "Hej"),
/// );
///
/// let translator = Arc::new(Translator::new(
///     TranslatorConfig::builder().detect_ambient_culture(false).build(),
/// ));
/// translator.catalog().add(en.clone());
/// translator.catalog().add(sv.clone());
///
/// let greeting = translator.get_or_create_translation(store, "Greeting");
/// translator.set_current_culture(Some(en)).unwrap();
/// assert_eq!(greeting.translated().unwrap(), "Hello");
/// translator.set_current_culture(Some(sv)).unwrap();
/// assert_eq!(greeting.translated().unwrap(), "Hej");
/// ```
pub struct Translation {
    translator: Arc<Translator>,
    store: Arc<dyn ResourceStore>,
    key: String,
    error_handling: ErrorHandling,
}

impl Translation {
    pub fn new(
        translator: Arc<Translator>,
        store: Arc<dyn ResourceStore>,
        key: impl Into<String>,
        error_handling: ErrorHandling,
    ) -> Self {
        Self {
            translator,
            store,
            key: key.into(),
            error_handling,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &dyn ResourceStore {
        &*self.store
    }

    pub fn error_handling(&self) -> ErrorHandling {
        self.error_handling
    }

    /// The text for the translator's current culture.
    pub fn translated(&self) -> Result<String, TranslationError> {
        self.translator
            .translate_with(Some(&*self.store), &self.key, self.error_handling)
    }

    /// The text for a specific culture.
    pub fn translated_to(&self, culture: Option<&Culture>) -> Result<String, TranslationError> {
        self.translator
            .translate_to(Some(&*self.store), &self.key, culture, self.error_handling)
    }
}

impl Display for Translation {
    /// Renders with the handle's policy. A policy that resolves to `Throw` is
    /// shown as `ReturnErrorInfo`, so gaps become diagnostic text.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let policy = match self.error_handling.resolve(self.translator.error_handling()) {
            ResolvedErrorHandling::Throw => ErrorHandling::ReturnErrorInfo,
            resolved @ (ResolvedErrorHandling::ReturnErrorInfo
            | ResolvedErrorHandling::ReturnErrorInfoPreserveNeutral) => resolved.into(),
        };
        let text = self
            .translator
            .translate_with(Some(&*self.store), &self.key, policy)
            .unwrap_or_else(|e| e.to_string());
        f.write_str(&text)
    }
}

impl Debug for Translation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translation")
            .field("store", &self.store.identity())
            .field("key", &self.key)
            .field("error_handling", &self.error_handling)
            .finish_non_exhaustive()
    }
}
