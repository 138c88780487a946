//! Per-section validators.

use crate::schema::{QabotConfig, KNOWN_MODELS};

use super::helpers::{validate_max, validate_non_empty, validate_range, validate_range_f64};

/// Fixed notices stand in for answers, so none may be blank.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &QabotConfig) {
    let chat = &config.chat;
    validate_non_empty(errors, "chat.greeting", &chat.greeting);
    validate_non_empty(
        errors,
        "chat.not_initialized_notice",
        &chat.not_initialized_notice,
    );
    validate_non_empty(errors, "chat.apology", &chat.apology);
    validate_non_empty(errors, "chat.missing_key_notice", &chat.missing_key_notice);
    validate_non_empty(errors, "chat.init_failed_notice", &chat.init_failed_notice);
}

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &QabotConfig) {
    if !KNOWN_MODELS.contains(&config.model.default.as_str()) {
        errors.push(format!(
            "model.default = {:?} is not one of {}",
            config.model.default,
            KNOWN_MODELS.join(", ")
        ));
    }
    validate_range_f64(
        errors,
        "model.temperature",
        config.model.temperature,
        0.0,
        2.0,
    );
    validate_max(errors, "model.max_tokens", config.model.max_tokens, 128_000);
}

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &QabotConfig) {
    let api = &config.api;
    if !(api.base_url.starts_with("https://") || api.base_url.starts_with("http://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }
    validate_non_empty(errors, "api.api_key_env", &api.api_key_env);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        api.request_timeout_secs,
        5,
        600,
    );
}

pub(crate) fn validate_memory(errors: &mut Vec<String>, config: &QabotConfig) {
    validate_max(errors, "memory.max_turns", config.memory.max_turns, 500);
}
