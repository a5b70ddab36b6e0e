use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a translation gap is reported, as requested by a caller.
///
/// `Default` defers to the translator's process-wide setting. It never
/// survives resolution: see [`ErrorHandling::resolve`].
///
/// Names serialize as kebab-case and parse from kebab-case, snake_case or
/// PascalCase (`return-error-info`, `return_error_info`, `ReturnErrorInfo`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ErrorHandling {
    /// Use the translator's configured default.
    #[default]
    Default,
    /// Return an error at the first gap.
    Throw,
    /// Return a diagnostic string describing the gap.
    ReturnErrorInfo,
    /// Like `ReturnErrorInfo`, but invariant content is returned unmarked.
    ReturnErrorInfoPreserveNeutral,
}

/// The policy actually applied during resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolvedErrorHandling {
    Throw,
    ReturnErrorInfo,
    ReturnErrorInfoPreserveNeutral,
}

/// An unrecognized error handling name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown error handling '{0}', expected one of: default, throw, return-error-info, return-error-info-preserve-neutral")]
pub struct ErrorHandlingParseError(pub String);

impl ErrorHandling {
    /// Every requested policy, in declaration order.
    pub const ALL: [ErrorHandling; 4] = [
        ErrorHandling::Default,
        ErrorHandling::Throw,
        ErrorHandling::ReturnErrorInfo,
        ErrorHandling::ReturnErrorInfoPreserveNeutral,
    ];

    /// Resolve a requested policy against the process-wide default.
    ///
    /// A `Default` request takes `default`; if that is `Default` as well the
    /// result is `Throw`.
    ///
    /// ```
    /// use tolk::{ErrorHandling, ResolvedErrorHandling};
    ///
    /// assert_eq!(
    ///     ErrorHandling::Default.resolve(ErrorHandling::ReturnErrorInfo),
    ///     ResolvedErrorHandling::ReturnErrorInfo,
    /// );
    /// assert_eq!(
    ///     ErrorHandling::Default.resolve(ErrorHandling::Default),
    ///     ResolvedErrorHandling::Throw,
    /// );
    /// ```
    pub fn resolve(self, default: ErrorHandling) -> ResolvedErrorHandling {
        match self {
            ErrorHandling::Default => match default {
                ErrorHandling::Default | ErrorHandling::Throw => ResolvedErrorHandling::Throw,
                ErrorHandling::ReturnErrorInfo => ResolvedErrorHandling::ReturnErrorInfo,
                ErrorHandling::ReturnErrorInfoPreserveNeutral => {
                    ResolvedErrorHandling::ReturnErrorInfoPreserveNeutral
                }
            },
            ErrorHandling::Throw => ResolvedErrorHandling::Throw,
            ErrorHandling::ReturnErrorInfo => ResolvedErrorHandling::ReturnErrorInfo,
            ErrorHandling::ReturnErrorInfoPreserveNeutral => {
                ResolvedErrorHandling::ReturnErrorInfoPreserveNeutral
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorHandling::Default => "default",
            ErrorHandling::Throw => "throw",
            ErrorHandling::ReturnErrorInfo => "return-error-info",
            ErrorHandling::ReturnErrorInfoPreserveNeutral => "return-error-info-preserve-neutral",
        }
    }
}

impl ResolvedErrorHandling {
    pub fn is_throw(self) -> bool {
        self == ResolvedErrorHandling::Throw
    }
}

impl From<ResolvedErrorHandling> for ErrorHandling {
    fn from(resolved: ResolvedErrorHandling) -> Self {
        match resolved {
            ResolvedErrorHandling::Throw => ErrorHandling::Throw,
            ResolvedErrorHandling::ReturnErrorInfo => ErrorHandling::ReturnErrorInfo,
            ResolvedErrorHandling::ReturnErrorInfoPreserveNeutral => {
                ErrorHandling::ReturnErrorInfoPreserveNeutral
            }
        }
    }
}

impl Display for ErrorHandling {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ResolvedErrorHandling {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ErrorHandling::from(*self).fmt(f)
    }
}

impl FromStr for ErrorHandling {
    type Err = ErrorHandlingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = kebab_case(s.trim());
        ErrorHandling::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
            .ok_or_else(|| ErrorHandlingParseError(s.to_string()))
    }
}

impl TryFrom<String> for ErrorHandling {
    type Error = ErrorHandlingParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Lowercase `name`, turning `_` and lower-to-upper case boundaries into `-`.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;
    for c in name.chars() {
        if c == '_' {
            out.push('-');
        } else {
            if c.is_ascii_uppercase()
                && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        }
        previous = Some(c);
    }
    out
}
