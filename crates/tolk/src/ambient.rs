//! Detection of the host's ambient culture from POSIX locale variables.

use std::env;

use crate::types::Culture;

/// Variables consulted in order; the first usable one wins.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// The culture of the current process environment, if one is set.
pub fn ambient_culture() -> Option<Culture> {
    ambient_culture_from(|name| env::var(name).ok())
}

/// Like [`ambient_culture`], reading variables through `lookup`.
pub fn ambient_culture_from(lookup: impl Fn(&str) -> Option<String>) -> Option<Culture> {
    LOCALE_VARIABLES
        .iter()
        .filter_map(|name| lookup(name))
        .find_map(|value| culture_from_posix_locale(&value))
}

/// Convert a POSIX locale such as `sv_SE.UTF-8@euro` into a culture.
///
/// Returns `None` for empty values and for the `C` and `POSIX` locales.
pub fn culture_from_posix_locale(value: &str) -> Option<Culture> {
    let without_modifier = value.split('@').next().unwrap_or_default();
    let tag = without_modifier.split('.').next().unwrap_or_default().trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Culture::parse(tag)
        .ok()
        .filter(|culture| !culture.is_invariant())
}
