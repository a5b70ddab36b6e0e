use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tags that parse to the invariant culture, compared case-insensitively.
const INVARIANT_ALIASES: &[&str] = &["", "und", "iv", "invariant"];

/// A language/region tag used to select translated content.
///
/// `Culture` wraps a normalized BCP-47 language identifier. Parsing is
/// delegated to `icu_locale_core`, so `"EN_us"` and `"en-US"` produce the same
/// culture. Equality, hashing and ordering all go through the normalized name,
/// which keeps catalogs deterministic.
///
/// The invariant culture stands for base content that belongs to no specific
/// language. Its name is empty and it displays as `invariant`.
///
/// # Example
///
/// ```
/// use tolk::Culture;
///
/// let swedish: Culture = "sv_se".parse().unwrap();
/// assert_eq!(swedish.name(), "sv-SE");
/// assert!(swedish.same_language(&"sv".parse().unwrap()));
/// assert!(Culture::invariant().is_invariant());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Culture {
    /// Normalized tag, empty for the invariant culture.
    name: String,
    /// Primary language subtag, empty for the invariant culture.
    language: String,
}

/// A tag that is not a valid language identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid culture tag '{tag}': {message}")]
pub struct CultureParseError {
    pub tag: String,
    pub message: String,
}

impl Culture {
    /// The culture representing untranslated base content.
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            language: String::new(),
        }
    }

    /// Parse a culture tag.
    ///
    /// Accepts `-` or `_` as subtag separator. The aliases `""`, `"und"`,
    /// `"iv"` and `"invariant"` produce [`Culture::invariant`].
    pub fn parse(tag: &str) -> Result<Self, CultureParseError> {
        let trimmed = tag.trim();
        if INVARIANT_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::invariant());
        }

        let normalized = trimmed.replace('_', "-");
        let id = LanguageIdentifier::try_from_str(&normalized).map_err(|e| CultureParseError {
            tag: tag.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            name: id.to_string(),
            language: id.language.as_str().to_string(),
        })
    }

    /// The normalized tag, e.g. `"sv-SE"`. Empty for the invariant culture.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primary language subtag, e.g. `"sv"` for `"sv-SE"`.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    /// Coarse comparison on the primary language subtag.
    ///
    /// `en-US` and `en-GB` share a language; the invariant culture shares a
    /// language with nothing, including itself.
    pub fn same_language(&self, other: &Culture) -> bool {
        !self.is_invariant() && !other.is_invariant() && self.language == other.language
    }
}

impl Display for Culture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            f.write_str(&self.name)
        }
    }
}

impl FromStr for Culture {
    type Err = CultureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Culture {
    type Error = CultureParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Culture {
    type Error = CultureParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.name
    }
}
