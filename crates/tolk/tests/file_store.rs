//! Tests for loading resource sets from disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tolk::{Culture, FileStore, LoadError, ResourceStore};

fn culture(tag: &str) -> Culture {
    Culture::parse(tag).unwrap()
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn greetings_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Greetings.tolk",
        "Greeting = \"Hello\";\nFarewell = \"Goodbye\";\n",
    );
    write(dir.path(), "Greetings.sv.tolk", "Greeting = \"Hej\";\n");
    write(dir.path(), "de/Greetings.tolk", "Greeting = \"Hallo\";\n");
    write(dir.path(), "Other.fi.tolk", "Greeting = \"Hei\";\n");
    dir
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn load_reads_every_layout() {
    let dir = greetings_dir();
    let store = FileStore::load(dir.path(), "Greetings").unwrap();

    assert_eq!(store.identity(), "Greetings");
    assert_eq!(store.base_name(), "Greetings");
    assert_eq!(store.directory(), dir.path());
    assert_eq!(
        store.get("Greeting", &Culture::invariant()).as_deref(),
        Some("Hello")
    );
    assert_eq!(store.get("Greeting", &culture("sv")).as_deref(), Some("Hej"));
    assert_eq!(store.get("Greeting", &culture("de")).as_deref(), Some("Hallo"));
}

#[test]
fn other_resource_sets_are_not_loaded() {
    let dir = greetings_dir();
    let store = FileStore::load(dir.path(), "Greetings").unwrap();

    assert!(!store.supports_culture(&culture("fi")));
    assert_eq!(
        store.cultures(),
        vec![Culture::invariant(), culture("de"), culture("sv")]
    );
}

#[test]
fn lookups_are_exact() {
    let dir = greetings_dir();
    let store = FileStore::load(dir.path(), "Greetings").unwrap();

    assert_eq!(store.get("Farewell", &culture("sv")), None);
    assert_eq!(store.get("Greeting", &culture("sv-FI")), None);
    assert_eq!(store.keys(&culture("sv")), vec!["Greeting".to_string()]);
    assert_eq!(
        store.keys(&Culture::invariant()),
        vec!["Farewell".to_string(), "Greeting".to_string()]
    );
}

#[test]
fn paths_are_recorded_per_culture() {
    let dir = greetings_dir();
    let store = FileStore::load(dir.path(), "Greetings").unwrap();

    assert_eq!(
        store.paths_for(&culture("de")),
        [dir.path().join("de").join("Greetings.tolk")]
    );
    assert!(store.paths_for(&culture("fi")).is_empty());
}

#[test]
fn empty_file_still_marks_culture_supported() {
    let dir = greetings_dir();
    write(dir.path(), "Greetings.nb.tolk", "// nothing translated yet\n");
    let store = FileStore::load(dir.path(), "Greetings").unwrap();

    assert!(store.supports_culture(&culture("nb")));
    assert!(store.keys(&culture("nb")).is_empty());
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn missing_resource_set_is_an_error() {
    let dir = greetings_dir();
    let err = FileStore::load(dir.path(), "Menus").unwrap_err();
    assert!(matches!(
        &err,
        LoadError::MissingResources { base_name, .. } if base_name == "Menus"
    ));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = FileStore::load(dir.path().join("absent"), "Greetings").unwrap_err();
    assert!(matches!(err, LoadError::MissingResources { .. }));
}

#[test]
fn parse_error_carries_file_and_position() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Greetings.tolk", "Greeting = \"Hello\"\nFarewell = \"Bye\";\n");

    let err = FileStore::load(dir.path(), "Greetings").unwrap_err();
    let LoadError::Parse {
        path, line, column, ..
    } = &err
    else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(path, &dir.path().join("Greetings.tolk"));
    assert_eq!((*line, *column), (2, 1));
    assert!(err.to_string().ends_with("expected ';', found 'F'"));
}

#[test]
fn duplicate_key_in_one_culture_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Greetings.tolk",
        "Greeting = \"Hello\";\n\nGreeting = \"Hi\";\n",
    );

    let err = FileStore::load(dir.path(), "Greetings").unwrap_err();
    assert!(matches!(
        &err,
        LoadError::DuplicateKey { line: 3, key, .. } if key == "Greeting"
    ));
}

#[test]
fn duplicate_key_across_layouts_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Greetings.tolk", "Greeting = \"Hello\";\n");
    write(dir.path(), "Greetings.sv.tolk", "Greeting = \"Hej\";\n");
    write(dir.path(), "sv/Greetings.tolk", "Greeting = \"Tjena\";\n");

    let err = FileStore::load(dir.path(), "Greetings").unwrap_err();
    assert!(matches!(err, LoadError::DuplicateKey { .. }));
}

#[test]
fn same_key_in_different_cultures_is_fine() {
    let dir = greetings_dir();
    assert!(FileStore::load(dir.path(), "Greetings").is_ok());
}

// =========================================================================
// Reload
// =========================================================================

#[test]
fn reload_picks_up_changes_and_new_cultures() {
    let dir = greetings_dir();
    let mut store = FileStore::load(dir.path(), "Greetings").unwrap();

    write(dir.path(), "Greetings.sv.tolk", "Greeting = \"Tjena\";\n");
    write(dir.path(), "Greetings.fi.tolk", "Greeting = \"Hei\";\n");
    let count = store.reload().unwrap();

    assert_eq!(count, 5);
    assert_eq!(store.get("Greeting", &culture("sv")).as_deref(), Some("Tjena"));
    assert!(store.supports_culture(&culture("fi")));
}

#[test]
fn failed_reload_keeps_previous_strings() {
    let dir = greetings_dir();
    let mut store = FileStore::load(dir.path(), "Greetings").unwrap();

    write(dir.path(), "Greetings.sv.tolk", "Greeting = ");
    assert!(matches!(store.reload(), Err(LoadError::Parse { .. })));
    assert_eq!(store.get("Greeting", &culture("sv")).as_deref(), Some("Hej"));
}
