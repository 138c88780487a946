//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_qabot_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, qabot_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
default = "gpt-4o"

[memory]
max_turns = 5
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.default, "gpt-4o");
    assert_eq!(config.memory.max_turns, 5);
    // Defaults preserved
    assert_eq!(config.model.temperature, 0.0);
    assert!(!config.retrieval.enabled);
    assert_eq!(config.api.base_url, "https://api.openai.com/v1");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, qabot_common::ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
temperature = 9.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.temperature, 9.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qabot").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.default, "gpt-4");
    assert_eq!(config.memory.max_turns, 20);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::QabotConfig;

    let config: QabotConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn logging_file_override_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"DEBUG\"\nfile = \"/var/tmp/q.log\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, crate::schema::LogLevel::Debug);
    assert_eq!(
        config.logging.file.as_deref(),
        Some(Path::new("/var/tmp/q.log"))
    );
}

#[test]
fn default_log_path_is_under_qabot() {
    if let Ok(path) = default_log_path() {
        assert!(path.ends_with("qabot/qabot.log"));
    }
}

#[test]
fn default_config_path_is_reasonable() {
    // Headless CI may lack a config dir
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("qabot"));
        assert!(path_str.ends_with("config.toml"));
    }
}
