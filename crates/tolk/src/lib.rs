pub mod ambient;
pub mod catalog;
pub mod error;
#[cfg(feature = "global-translator")]
pub mod global;
pub mod parser;
pub mod scan;
pub mod store;
pub mod translation;
pub mod translator;
pub mod typed;
pub mod types;
pub mod validate;

pub use catalog::CultureCatalog;
pub use error::{LoadError, TranslationError, compute_suggestions};
pub use store::{FileStore, MemoryStore, ResourceStore};
pub use translation::Translation;
pub use translator::{
    DiagnosticFormat, INVALID_KEY_TEXT, SubscriptionId, Translator, TranslatorConfig,
};
pub use typed::StoreTranslator;
pub use types::{Culture, CultureParseError, ErrorHandling, ResolvedErrorHandling};
pub use validate::{ValidationWarning, validate_translations};
