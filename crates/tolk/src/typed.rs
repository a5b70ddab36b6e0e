//! A translator bound to a single store.

use std::sync::Arc;

use crate::error::TranslationError;
use crate::store::ResourceStore;
use crate::translation::Translation;
use crate::translator::Translator;
use crate::types::{Culture, ErrorHandling};

/// Pairs a [`Translator`] with one store so call sites only pass keys.
///
/// Resolution is identical to calling the translator with `Some(store)`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tolk::{Culture, MemoryStore, StoreTranslator, Translator};
///
/// let store = MemoryStore::new("Resources").with(Culture::invariant(), "Title", "Library");
/// let resources = StoreTranslator::new(Arc::new(Translator::default()), Arc::new(store));
///
/// assert_eq!(resources.translate_to("Title", None, Default::default()).unwrap(), "Library");
/// ```
#[derive(Debug)]
pub struct StoreTranslator<S> {
    translator: Arc<Translator>,
    store: Arc<S>,
}

impl<S> Clone for StoreTranslator<S> {
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ResourceStore + 'static> StoreTranslator<S> {
    pub fn new(translator: Arc<Translator>, store: Arc<S>) -> Self {
        Self { translator, store }
    }

    pub fn translator(&self) -> &Arc<Translator> {
        &self.translator
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Translate `key` to the current culture with the default policy.
    pub fn translate(&self, key: &str) -> Result<String, TranslationError> {
        self.translator.translate(Some(&*self.store), key)
    }

    /// Translate `key` to the current culture.
    pub fn translate_with(
        &self,
        key: &str,
        error_handling: ErrorHandling,
    ) -> Result<String, TranslationError> {
        self.translator
            .translate_with(Some(&*self.store), key, error_handling)
    }

    /// Translate `key` to `culture`.
    pub fn translate_to(
        &self,
        key: &str,
        culture: Option<&Culture>,
        error_handling: ErrorHandling,
    ) -> Result<String, TranslationError> {
        self.translator
            .translate_to(Some(&*self.store), key, culture, error_handling)
    }

    /// A shared handle that follows the current culture.
    pub fn get_or_create_translation(&self, key: &str) -> Arc<Translation> {
        let store: Arc<dyn ResourceStore> = self.store.clone();
        self.translator.get_or_create_translation(store, key)
    }
}
