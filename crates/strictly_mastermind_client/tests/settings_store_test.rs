//! Tests for settings persistence.

use strictly_mastermind::Settings;
use strictly_mastermind_client::SettingsStore;
use tempfile::TempDir;

/// Creates a store in a fresh temporary directory. The directory must stay
/// in scope to keep the file alive.
fn setup_store() -> (TempDir, SettingsStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("mastermind_settings.json"));
    (dir, store)
}

#[test]
fn test_load_without_file_gives_defaults() {
    let (_dir, store) = setup_store();
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_save_then_load() {
    let (_dir, store) = setup_store();
    let settings = Settings::new(8, 5, false).expect("Valid settings");
    store.save(&settings).expect("Save failed");
    assert_eq!(store.load(), settings);
}

#[test]
fn test_saved_file_has_exactly_three_fields() {
    let (_dir, store) = setup_store();
    store
        .save(&Settings::new(6, 4, true).expect("Valid settings"))
        .expect("Save failed");

    let text = std::fs::read_to_string(store.path()).expect("Read failed");
    let value: serde_json::Value = serde_json::from_str(&text).expect("Saved JSON");
    let object = value.as_object().expect("JSON object");

    assert_eq!(object.len(), 3);
    assert_eq!(object["alphabetSize"], 6);
    assert_eq!(object["codeLength"], 4);
    assert_eq!(object["allowDuplicates"], true);
}

#[test]
fn test_last_write_wins() {
    let (_dir, store) = setup_store();
    let first = Settings::new(4, 3, true).expect("Valid settings");
    let second = Settings::new(10, 6, false).expect("Valid settings");
    store.save(&first).expect("Save failed");
    store.save(&second).expect("Save failed");
    assert_eq!(store.load(), second);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let (_dir, store) = setup_store();
    std::fs::write(store.path(), "{ not json").expect("Write failed");
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_out_of_range_file_gives_defaults() {
    let (_dir, store) = setup_store();
    std::fs::write(
        store.path(),
        r#"{"alphabetSize": 40, "codeLength": 4, "allowDuplicates": true}"#,
    )
    .expect("Write failed");
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_impossible_unique_code_file_gives_defaults() {
    let (_dir, store) = setup_store();
    std::fs::write(
        store.path(),
        r#"{"alphabetSize": 3, "codeLength": 5, "allowDuplicates": false}"#,
    )
    .expect("Write failed");
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_legacy_field_names_load() {
    let (_dir, store) = setup_store();
    std::fs::write(
        store.path(),
        r#"{"numColors": 8, "numPegs": 5, "allowDuplicates": false}"#,
    )
    .expect("Write failed");
    assert_eq!(
        store.load(),
        Settings::new(8, 5, false).expect("Valid settings")
    );
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));
    let settings = Settings::new(5, 5, true).expect("Valid settings");
    store.save(&settings).expect("Save failed");
    assert_eq!(store.load(), settings);
}

#[test]
fn test_clear_restores_defaults() {
    let (_dir, store) = setup_store();
    store
        .save(&Settings::new(12, 7, true).expect("Valid settings"))
        .expect("Save failed");
    store.clear().expect("Clear failed");
    assert_eq!(store.load(), Settings::default());
    store.clear().expect("Clearing twice is fine");
}
