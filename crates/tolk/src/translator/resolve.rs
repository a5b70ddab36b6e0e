//! The fallback chain that turns (store, key, culture) into a string.

use crate::error::{TranslationError, compute_suggestions};
use crate::store::ResourceStore;
use crate::translator::Translator;
use crate::translator::diagnostic::{DiagnosticFormat, INVALID_KEY_TEXT};
use crate::types::{Culture, ErrorHandling, ResolvedErrorHandling};

impl Translator {
    /// Translate `key` to the current culture with the default policy.
    ///
    /// Equivalent to [`Translator::translate_with`] with
    /// `ErrorHandling::Default`.
    pub fn translate(
        &self,
        store: Option<&dyn ResourceStore>,
        key: &str,
    ) -> Result<String, TranslationError> {
        self.translate_with(store, key, ErrorHandling::Default)
    }

    /// Translate `key` to the current culture.
    pub fn translate_with(
        &self,
        store: Option<&dyn ResourceStore>,
        key: &str,
        error_handling: ErrorHandling,
    ) -> Result<String, TranslationError> {
        let culture = self.current_culture();
        self.translate_to(store, key, culture.as_ref(), error_handling)
    }

    /// Translate `key` to `culture`.
    ///
    /// `None` resolves against the invariant culture. The lookup order is:
    ///
    /// 1. the store must be present and the key non-empty
    /// 2. a culture the store supports but the catalog lacks is added to the
    ///    catalog
    /// 3. an unsupported culture falls back to invariant content, marked with
    ///    [`DiagnosticFormat::MissingCulture`]
    /// 4. a supported culture without the key falls back to invariant content,
    ///    marked with [`DiagnosticFormat::MissingTranslation`], or to
    ///    [`DiagnosticFormat::MissingKey`] when the invariant culture lacks it
    ///    too
    /// 5. otherwise the stored string is returned as is
    ///
    /// Under `Throw` every gap is an error. `ReturnErrorInfoPreserveNeutral`
    /// returns invariant content without a marker; `ReturnErrorInfo` always
    /// marks it.
    pub fn translate_to(
        &self,
        store: Option<&dyn ResourceStore>,
        key: &str,
        culture: Option<&Culture>,
        error_handling: ErrorHandling,
    ) -> Result<String, TranslationError> {
        let policy = error_handling.resolve(self.error_handling());
        let invariant = Culture::invariant();
        let culture = culture.unwrap_or(&invariant);

        let Some(store) = store else {
            if policy.is_throw() {
                return Err(TranslationError::MissingStore {
                    key: key.to_string(),
                });
            }
            return Ok(DiagnosticFormat::MissingStore.format(key));
        };

        if key.is_empty() {
            if policy.is_throw() {
                return Err(TranslationError::InvalidKey);
            }
            return Ok(INVALID_KEY_TEXT.to_string());
        }

        self.register_supported_culture(store, culture);

        if !store.supports_culture(culture) {
            if policy.is_throw() {
                return Err(TranslationError::UnsupportedCulture {
                    store: store.identity().to_string(),
                    culture: culture.clone(),
                });
            }

            tracing::trace!(store = store.identity(), key, culture = %culture, "culture not supported, using invariant");
            let neutral = store.get(key, &invariant);
            return Ok(neutral_or_diagnostic(
                neutral,
                key,
                policy,
                DiagnosticFormat::MissingCulture,
            ));
        }

        if let Some(translated) = store.get(key, culture) {
            return Ok(translated);
        }

        match store.get(key, &invariant) {
            Some(neutral) => {
                if policy.is_throw() {
                    return Err(TranslationError::MissingTranslation {
                        store: store.identity().to_string(),
                        key: key.to_string(),
                        culture: culture.clone(),
                    });
                }

                tracing::trace!(store = store.identity(), key, culture = %culture, "key not translated, using invariant");
                Ok(neutral_or_diagnostic(
                    Some(neutral),
                    key,
                    policy,
                    DiagnosticFormat::MissingTranslation,
                ))
            }
            None => {
                if policy.is_throw() {
                    return Err(TranslationError::MissingKey {
                        store: store.identity().to_string(),
                        key: key.to_string(),
                        suggestions: compute_suggestions(key, &store.keys(&invariant)),
                    });
                }
                Ok(DiagnosticFormat::MissingKey.format(key))
            }
        }
    }

    /// Add `culture` to the catalog when the store has resources the directory
    /// scan did not see.
    fn register_supported_culture(&self, store: &dyn ResourceStore, culture: &Culture) {
        if culture.is_invariant()
            || self.catalog().contains(culture)
            || !store.supports_culture(culture)
        {
            return;
        }

        if self.catalog().add(culture.clone()) {
            tracing::debug!(store = store.identity(), culture = %culture, "registered culture supported by store");
        }
    }
}

/// The result for a gap with a non-throwing policy.
///
/// `PreserveNeutral` shows invariant content unmarked. Otherwise the diagnostic
/// template shows the invariant text, or the key when there is no non-empty
/// invariant text.
fn neutral_or_diagnostic(
    neutral: Option<String>,
    key: &str,
    policy: ResolvedErrorHandling,
    format: DiagnosticFormat,
) -> String {
    match neutral {
        Some(neutral) if policy == ResolvedErrorHandling::ReturnErrorInfoPreserveNeutral => neutral,
        Some(neutral) if !neutral.is_empty() => format.format(&neutral),
        Some(_) | None => format.format(key),
    }
}
