//! Tests for settings validation and clamping.

use strictly_mastermind::{Settings, SettingsError};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.alphabet_size(), 6);
    assert_eq!(settings.code_length(), 4);
    assert!(settings.allow_duplicates());
    assert!(settings.validate().is_ok());
}

#[test]
fn test_new_accepts_range_edges() {
    assert!(Settings::new(2, 2, true).is_ok());
    assert!(Settings::new(26, 10, false).is_ok());
}

#[test]
fn test_new_rejects_out_of_range() {
    assert_eq!(
        Settings::new(1, 4, true),
        Err(SettingsError::AlphabetSizeOutOfRange(1))
    );
    assert_eq!(
        Settings::new(27, 4, true),
        Err(SettingsError::AlphabetSizeOutOfRange(27))
    );
    assert_eq!(
        Settings::new(6, 11, true),
        Err(SettingsError::CodeLengthOutOfRange(11))
    );
    assert_eq!(
        Settings::new(6, 1, true),
        Err(SettingsError::CodeLengthOutOfRange(1))
    );
}

#[test]
fn test_unique_code_needs_enough_colors() {
    assert_eq!(
        Settings::new(3, 4, false),
        Err(SettingsError::TooFewColorsForUniqueCode {
            alphabet_size: 3,
            code_length: 4
        })
    );
    assert!(Settings::new(3, 4, true).is_ok());
    assert!(Settings::new(4, 4, false).is_ok());
}

#[test]
fn test_clamped_pulls_values_into_range() {
    let settings = Settings::clamped(100, -3, true);
    assert_eq!(settings.alphabet_size(), 26);
    assert_eq!(settings.code_length(), 2);

    let settings = Settings::clamped(0, 42, true);
    assert_eq!(settings.alphabet_size(), 2);
    assert_eq!(settings.code_length(), 10);
}

#[test]
fn test_clamped_shortens_code_without_duplicates() {
    let settings = Settings::clamped(3, 8, false);
    assert_eq!(settings.alphabet_size(), 3);
    assert_eq!(settings.code_length(), 3);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_with_methods_keep_settings_valid() {
    let settings = Settings::default()
        .with_code_length(8)
        .with_alphabet_size(5)
        .with_allow_duplicates(false);
    assert_eq!(settings.alphabet_size(), 5);
    assert_eq!(settings.code_length(), 5);
    assert!(!settings.allow_duplicates());
}

#[test]
fn test_json_field_names() {
    let json = serde_json::to_value(Settings::default()).expect("Serialize failed");
    assert_eq!(
        json,
        serde_json::json!({"alphabetSize": 6, "codeLength": 4, "allowDuplicates": true})
    );
}

#[test]
fn test_json_accepts_legacy_field_names() {
    let settings: Settings =
        serde_json::from_str(r#"{"numColors": 8, "numPegs": 5, "allowDuplicates": false}"#)
            .expect("Parse failed");
    assert_eq!(settings, Settings::new(8, 5, false).expect("Valid settings"));
}
