use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::parser::{ParseError, RESOURCE_EXTENSION, parse_resources};
use crate::scan::{culture_tag, split_resource_file_name};
use crate::store::{MemoryStore, ResourceStore};
use crate::types::Culture;

/// A resource set loaded from `.tolk` files in one directory.
///
/// For a base name `Resources` the store reads:
/// - `Resources.tolk` for the invariant culture
/// - `Resources.<tag>.tolk` for a specific culture
/// - `<tag>/Resources.tolk` for a specific culture (satellite layout)
///
/// Files are read eagerly. The originating paths are kept so the set can be
/// reloaded after the files change.
///
/// # Example
///
/// ```ignore
/// let store = FileStore::load("assets/strings", "Resources")?;
/// let text = translator.translate(Some(&store), "Greeting")?;
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
    base_name: String,
    paths: BTreeMap<Culture, Vec<PathBuf>>,
    strings: MemoryStore,
}

impl FileStore {
    /// Load the resource set `base_name` from `directory`.
    pub fn load(directory: impl AsRef<Path>, base_name: &str) -> Result<Self, LoadError> {
        let directory = directory.as_ref().to_path_buf();
        let paths = discover(&directory, base_name);
        if paths.is_empty() {
            return Err(LoadError::MissingResources {
                directory,
                base_name: base_name.to_string(),
            });
        }

        let strings = read_all(base_name, &paths)?;
        tracing::debug!(
            directory = %directory.display(),
            base_name,
            cultures = paths.len(),
            strings = strings.len(),
            "loaded resource set"
        );

        Ok(Self {
            directory,
            base_name: base_name.to_string(),
            paths,
            strings,
        })
    }

    /// Re-read every file of the resource set, picking up added or removed
    /// culture files. Returns the number of strings loaded.
    ///
    /// On error the previously loaded strings are kept.
    pub fn reload(&mut self) -> Result<usize, LoadError> {
        let paths = discover(&self.directory, &self.base_name);
        if paths.is_empty() {
            return Err(LoadError::MissingResources {
                directory: self.directory.clone(),
                base_name: self.base_name.clone(),
            });
        }

        let strings = read_all(&self.base_name, &paths)?;
        let count = strings.len();
        self.paths = paths;
        self.strings = strings;
        Ok(count)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The files that contributed strings for `culture`.
    pub fn paths_for(&self, culture: &Culture) -> &[PathBuf] {
        self.paths.get(culture).map(Vec::as_slice).unwrap_or_default()
    }
}

impl ResourceStore for FileStore {
    fn identity(&self) -> &str {
        &self.base_name
    }

    fn supports_culture(&self, culture: &Culture) -> bool {
        self.strings.supports_culture(culture)
    }

    fn get(&self, key: &str, culture: &Culture) -> Option<String> {
        self.strings.get(key, culture)
    }

    fn contains_key(&self, key: &str, culture: &Culture) -> bool {
        self.strings.contains_key(key, culture)
    }

    fn cultures(&self) -> Vec<Culture> {
        self.strings.cultures()
    }

    fn keys(&self, culture: &Culture) -> Vec<String> {
        self.strings.keys(culture)
    }
}

/// Find every file of the resource set, grouped by culture.
fn discover(directory: &Path, base_name: &str) -> BTreeMap<Culture, Vec<PathBuf>> {
    let mut paths: BTreeMap<Culture, Vec<PathBuf>> = BTreeMap::new();
    let Ok(entries) = fs::read_dir(directory) else {
        return paths;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        if path.is_dir() {
            let Some(culture) = culture_tag(name) else {
                continue;
            };
            let satellite = path.join(format!("{base_name}.{RESOURCE_EXTENSION}"));
            if satellite.is_file() {
                paths.entry(culture).or_default().push(satellite);
            }
            continue;
        }

        let Some((base, tag)) = split_resource_file_name(name) else {
            continue;
        };
        if base != base_name {
            continue;
        }
        let culture = match tag {
            Some(tag) => match culture_tag(tag) {
                Some(culture) => culture,
                None => continue,
            },
            None => Culture::invariant(),
        };
        paths.entry(culture).or_default().push(path);
    }

    for files in paths.values_mut() {
        files.sort();
    }
    paths
}

fn read_all(
    base_name: &str,
    paths: &BTreeMap<Culture, Vec<PathBuf>>,
) -> Result<MemoryStore, LoadError> {
    let mut strings = MemoryStore::new(base_name);
    for (culture, files) in paths {
        strings = strings.with_culture(culture.clone());
        for path in files {
            read_file(&mut strings, culture, path)?;
        }
    }
    Ok(strings)
}

fn read_file(strings: &mut MemoryStore, culture: &Culture, path: &Path) -> Result<(), LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let entries = parse_resources(&content).map_err(|e| match e {
        ParseError::Syntax {
            line,
            column,
            message,
        } => LoadError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            message,
        },
    })?;

    for entry in entries {
        if strings.contains_key(&entry.key, culture) {
            return Err(LoadError::DuplicateKey {
                path: path.to_path_buf(),
                line: entry.line,
                key: entry.key,
            });
        }
        strings.insert(culture.clone(), entry.key, entry.value);
    }

    tracing::trace!(path = %path.display(), culture = %culture, "read resource file");
    Ok(())
}
