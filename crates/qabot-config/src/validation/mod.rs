//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::QabotConfig;
use qabot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QabotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_chat(&mut errors, config);
    sections::validate_model(&mut errors, config);
    sections::validate_api(&mut errors, config);
    sections::validate_memory(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
