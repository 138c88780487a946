//! Model selection and completion API endpoint settings.

use serde::{Deserialize, Serialize};

/// Model identifiers offered at initialization.
pub const KNOWN_MODELS: &[&str] = &["gpt-4", "gpt-4o", "gpt-3.5-turbo"];

/// Model defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model preselected for `/init` (one of [`KNOWN_MODELS`]).
    pub default: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Completion token cap; 0 leaves it to the provider.
    pub max_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default: "gpt-4".into(),
            temperature: 0.0,
            max_tokens: 0,
        }
    }
}

/// Completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Environment variable consulted to prefill the API key.
    pub api_key_env: String,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
    /// Check the key and model against the API when initializing.
    pub verify_on_init: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            verify_on_init: true,
        }
    }
}
