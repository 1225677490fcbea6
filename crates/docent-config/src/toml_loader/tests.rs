//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_docent_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, docent_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
name = "gpt-4o-mini"
temperature = 0.9

[request]
retries = 2
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gpt-4o-mini");
    assert_eq!(config.model.temperature, 0.9);
    assert_eq!(config.request.retries, 2);
    // Defaults preserved
    assert_eq!(config.model.base_url, "https://api.openai.com/v1");
    assert_eq!(config.request.timeout_secs, 0);
    assert_eq!(
        config.conversation.system_prompt,
        "You are a helpful assistant."
    );
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, docent_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[request]\nretries = 50\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.request.retries, 50);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docent").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gpt-4o");
    assert_eq!(config.model.temperature, 0.4);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::DocentConfig;

    let config: DocentConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("docent"));
        assert!(path_str.ends_with("config.toml"));
    }
}
