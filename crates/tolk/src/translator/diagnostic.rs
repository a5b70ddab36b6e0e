/// Text returned for an empty key under the non-throwing policies.
pub const INVALID_KEY_TEXT: &str = "invalid key: empty";

/// Templates for the diagnostic strings returned instead of errors.
///
/// Each template has exactly one `{0}` placeholder, filled with the key or
/// with the invariant text that is shown in its place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticFormat {
    /// No store was provided.
    MissingStore,
    /// The store does not support the requested culture.
    MissingCulture,
    /// The culture is supported but lacks the key.
    MissingTranslation,
    /// No culture, including the invariant one, has the key.
    MissingKey,
}

impl DiagnosticFormat {
    pub fn template(self) -> &'static str {
        match self {
            DiagnosticFormat::MissingStore => "no resource store for {0}",
            DiagnosticFormat::MissingCulture => "missing culture, showing: {0}",
            DiagnosticFormat::MissingTranslation => "missing translation, showing: {0}",
            DiagnosticFormat::MissingKey => "missing key: {0}",
        }
    }

    /// Fill the placeholder with `argument`.
    pub fn format(self, argument: &str) -> String {
        self.template().replacen("{0}", argument, 1)
    }
}
