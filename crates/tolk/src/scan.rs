//! Discovery of the cultures that have resource files on disk.
//!
//! Two layouts are recognized under a resource root:
//! - culture-suffixed files: `Resources.sv.tolk`, `Resources.en-US.tolk`
//! - satellite directories: `sv/Resources.tolk`, `en-US/Resources.tolk`
//!
//! The root itself may be missing or unreadable; that yields no cultures.

use std::collections::BTreeSet;
use std::fs::{self, DirEntry};
use std::path::Path;

use crate::parser::RESOURCE_EXTENSION;
use crate::types::Culture;

/// Collect every culture that has at least one resource file under `root`.
pub fn resource_cultures(root: &Path) -> BTreeSet<Culture> {
    let mut cultures = BTreeSet::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(root = %root.display(), error = %e, "resource directory not readable");
            return cultures;
        }
    };

    for entry in entries.flatten() {
        if let Some(culture) = culture_of_entry(&entry) {
            cultures.insert(culture);
        }
    }

    tracing::debug!(root = %root.display(), count = cultures.len(), "scanned resource directory");
    cultures
}

fn culture_of_entry(entry: &DirEntry) -> Option<Culture> {
    let path = entry.path();
    if path.is_dir() {
        let name = path.file_name()?.to_str()?;
        let culture = culture_tag(name)?;
        if culture.is_invariant() || !contains_resource_file(&path) {
            return None;
        }
        Some(culture)
    } else {
        let file_name = path.file_name()?.to_str()?;
        let (_, tag) = split_resource_file_name(file_name)?;
        tag.and_then(culture_tag)
            .filter(|culture| !culture.is_invariant())
    }
}

fn contains_resource_file(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries.flatten().any(|entry| {
                let path = entry.path();
                path.is_file()
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .and_then(split_resource_file_name)
                        .is_some()
            })
        })
        .unwrap_or(false)
}

/// Split a resource file name into its base name and optional culture tag.
///
/// `"Resources.tolk"` gives `("Resources", None)`,
/// `"Resources.sv-SE.tolk"` gives `("Resources", Some("sv-SE"))`.
/// Returns `None` for files without the resource extension.
pub fn split_resource_file_name(file_name: &str) -> Option<(&str, Option<&str>)> {
    let stem = file_name.strip_suffix(RESOURCE_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() {
        return None;
    }
    if let Some((base, tag)) = stem.rsplit_once('.') {
        if !base.is_empty() && culture_tag(tag).is_some() {
            return Some((base, Some(tag)));
        }
    }
    Some((stem, None))
}

/// Parse a file or directory name as a culture tag.
///
/// Only two- and three-letter primary languages count, so that base names
/// such as `App.Strings` are not mistaken for a culture.
pub fn culture_tag(tag: &str) -> Option<Culture> {
    let culture = Culture::parse(tag).ok()?;
    (culture.language().len() <= 3).then_some(culture)
}
