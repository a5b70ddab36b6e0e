use std::env;
use std::path::PathBuf;

use bon::Builder;
use serde::Deserialize;

use crate::types::{Culture, ErrorHandling};

/// Settings used to construct a [`Translator`](crate::Translator).
///
/// Every field can also be changed at runtime through the translator itself.
/// The struct deserializes from any serde format; missing fields take their
/// defaults.
///
/// # Example
///
/// ```
/// use tolk::{Culture, ErrorHandling, TranslatorConfig};
///
/// let config = TranslatorConfig::builder()
///     .resource_directory("assets/strings")
///     .error_handling(ErrorHandling::ReturnErrorInfo)
///     .culture(Culture::parse("sv").unwrap())
///     .build();
///
/// assert_eq!(config.error_handling, ErrorHandling::ReturnErrorInfo);
/// ```
#[derive(Debug, Clone, Builder, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorConfig {
    /// Directory scanned for resource files to build the culture catalog.
    #[builder(into)]
    pub resource_directory: Option<PathBuf>,

    /// Process-wide policy used when a call asks for `ErrorHandling::Default`.
    #[builder(default = ErrorHandling::Throw)]
    pub error_handling: ErrorHandling,

    /// Initial current culture. Ignored, with a warning, if the catalog does
    /// not contain it.
    pub culture: Option<Culture>,

    /// Culture to match against the catalog when no `culture` is given.
    /// Defaults to the culture of the process environment.
    pub ambient_culture: Option<Culture>,

    /// Whether to read the process environment when `ambient_culture` is unset.
    #[builder(default = true)]
    pub detect_ambient_culture: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig::builder().build()
    }
}

impl TranslatorConfig {
    /// Configuration rooted at the directory of the running executable.
    pub fn from_process() -> Self {
        let resource_directory = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from));
        TranslatorConfig::builder()
            .maybe_resource_directory(resource_directory)
            .build()
    }
}
