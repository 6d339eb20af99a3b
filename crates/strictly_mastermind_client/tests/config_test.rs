//! Tests for client configuration loading and overrides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use strictly_mastermind_client::{
    ClientConfig, JUDGE_URL_ENV, JudgeConfig, SETTINGS_PATH_ENV, TIMEOUT_ENV,
};
use tempfile::TempDir;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.judge().base_url(), "https://api.r.cx/api");
    assert_eq!(config.judge().endpoints().start(), "/mm_start");
    assert_eq!(config.judge().endpoints().generate(), "/mm_gen");
    assert_eq!(config.judge().endpoints().evaluate(), "/mm_judge");
    assert_eq!(config.judge().timeout(), Duration::from_secs(10));
    assert_eq!(
        config.settings_path(),
        &PathBuf::from("mastermind_settings.json")
    );
    assert_eq!(
        config.judge().url(config.judge().endpoints().evaluate()),
        "https://api.r.cx/api/mm_judge"
    );
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("client.toml");
    std::fs::write(
        &path,
        r#"
settings_path = "/tmp/mm.json"

[judge]
base_url = "http://localhost:9000/api"

[judge.endpoints]
evaluate = "/score"
"#,
    )
    .expect("Write failed");

    let config = ClientConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.judge().base_url(), "http://localhost:9000/api");
    assert_eq!(config.judge().endpoints().evaluate(), "/score");
    assert_eq!(config.judge().endpoints().start(), "/mm_start");
    assert_eq!(*config.judge().timeout_secs(), 10);
    assert_eq!(config.settings_path(), &PathBuf::from("/tmp/mm.json"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("client.toml");
    std::fs::write(&path, "judge = 3 = 4").expect("Write failed");
    assert!(ClientConfig::from_file(&path).is_err());
}

#[test]
fn test_load_falls_back_to_defaults_without_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.toml");
    let config = ClientConfig::load(None, &missing).expect("Load failed");
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.toml");
    assert!(ClientConfig::load(Some(missing.as_path()), Path::new("unused.toml")).is_err());
}

#[test]
fn test_environment_overrides_file() {
    let config = ClientConfig::default()
        .with_judge(JudgeConfig::new("http://from-file"))
        .apply_overrides(lookup(&[
            (JUDGE_URL_ENV, "http://from-env"),
            (SETTINGS_PATH_ENV, "/var/mm.json"),
            (TIMEOUT_ENV, " 3 "),
        ]))
        .expect("Overrides failed");

    assert_eq!(config.judge().base_url(), "http://from-env");
    assert_eq!(config.settings_path(), &PathBuf::from("/var/mm.json"));
    assert_eq!(config.judge().timeout(), Duration::from_secs(3));
}

#[test]
fn test_no_overrides_changes_nothing() {
    let config = ClientConfig::default()
        .apply_overrides(lookup(&[]))
        .expect("Overrides failed");
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_bad_timeout_override_is_an_error() {
    let result = ClientConfig::default().apply_overrides(lookup(&[(TIMEOUT_ENV, "soon")]));
    assert!(result.is_err());
}
