//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = QabotConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_unknown_default_model() {
    let mut config = QabotConfig::default();
    config.model.default = "gpt-2".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.default"));
    assert!(err.contains("gpt-4o"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = QabotConfig::default();
    config.model.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_blank_apology() {
    let mut config = QabotConfig::default();
    config.chat.apology = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.apology"));
}

#[test]
fn catches_bad_base_url() {
    let mut config = QabotConfig::default();
    config.api.base_url = "api.openai.com/v1".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url"));
}

#[test]
fn catches_zero_connect_timeout() {
    let mut config = QabotConfig::default();
    config.api.connect_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.connect_timeout_secs"));
}

#[test]
fn unbounded_memory_is_allowed() {
    let mut config = QabotConfig::default();
    config.memory.max_turns = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_memory_window_too_large() {
    let mut config = QabotConfig::default();
    config.memory.max_turns = 501;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("memory.max_turns"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = QabotConfig::default();
    config.model.temperature = -1.0;
    config.api.request_timeout_secs = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
    assert!(err.contains("api.request_timeout_secs"));
    assert!(err.contains("; "));
}
