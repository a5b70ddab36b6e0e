//! Parser for `.tolk` resource files.
//!
//! A resource file is a flat list of `key = "text";` entries with `//` line
//! comments. Each file holds the strings of one culture for one resource set.

mod error;
mod file;

pub use error::ParseError;
pub use file::{ResourceEntry, parse_resources};

/// File extension of resource files, without the leading dot.
pub const RESOURCE_EXTENSION: &str = "tolk";
