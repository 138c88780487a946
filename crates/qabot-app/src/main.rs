mod cli;
mod controller;
mod display;
mod handle;
mod input;
mod markdown;
mod registry;
mod repl;
mod secret;
mod session;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use qabot_ai::{ConnectOptions, ModelId, OpenAiProvider};
use qabot_common::ConfigError;
use qabot_config::QabotConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::controller::SessionController;
use crate::display::{DisplaySurface, NoticeLevel, TerminalDisplay};
use crate::repl::{PresetKey, Repl};

fn connect_options(config: &QabotConfig) -> ConnectOptions {
    ConnectOptions {
        base_url: config.api.base_url.clone(),
        temperature: config.model.temperature,
        max_tokens: (config.model.max_tokens > 0).then_some(config.model.max_tokens),
        connect_timeout: Duration::from_secs(u64::from(config.api.connect_timeout_secs)),
        request_timeout: Duration::from_secs(u64::from(config.api.request_timeout_secs)),
        verify: config.api.verify_on_init,
    }
}

/// Pick the model for `/init`: CLI flag, then config, then the built-in default.
fn default_model(flag: Option<&str>, config: &QabotConfig) -> ModelId {
    for raw in flag.into_iter().chain([config.model.default.as_str()]) {
        match raw.parse::<ModelId>() {
            Ok(model) => return model,
            Err(e) => tracing::warn!("ignoring model {raw:?}: {e}"),
        }
    }
    ModelId::default()
}

/// Log file: config override, else the platform default.
fn log_path(config: Option<&QabotConfig>) -> Option<PathBuf> {
    config
        .and_then(|c| c.logging.file.clone())
        .or_else(|| qabot_config::toml_loader::default_log_path().ok())
}

/// Send all diagnostics to `path`. The chat terminal gets none of them.
fn init_file_logging(path: &Path, directive: Directive) -> std::io::Result<WorkerGuard> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
    Ok(guard)
}

fn config_fallback_notice(error: &ConfigError) -> String {
    format!("Config file ignored, built-in defaults are in use instead ({error}).")
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config comes first so its log settings can seed the subscriber
    let loaded = qabot_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| level.directive());
    let directive = log_directive
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    let log_guard = match log_path(loaded.as_ref().ok()) {
        Some(path) => match init_file_logging(&path, directive) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("qabot: logging disabled, cannot open {}: {e}", path.display());
                None
            }
        },
        None => None,
    };

    tracing::info!("qabot v{} starting...", env!("CARGO_PKG_VERSION"));

    let terminal = Arc::new(TerminalDisplay::new());
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!("config rejected, falling back to built-in defaults: {e}");
            (QabotConfig::default(), Some(e))
        }
    };
    terminal.show_banner(&config.chat.title, &config.chat.disclaimer);
    if let Some(e) = &config_error {
        terminal.notify(NoticeLevel::Error, &config_fallback_notice(e));
    }

    let preset_key = PresetKey::new(
        args.api_key
            .clone()
            .or_else(|| std::env::var(&config.api.api_key_env).ok()),
    );
    if preset_key.get().is_some() {
        tracing::info!("API key preset from flag or environment");
    }

    let model = default_model(args.model.as_deref(), &config);
    let provider = Arc::new(OpenAiProvider::new(connect_options(&config)));

    let controller = SessionController::new(provider, terminal, &config);
    let mut repl = Repl::new(
        controller,
        model,
        preset_key,
        config.chat.input_placeholder.clone(),
        qabot_config::config_to_json(&config),
    );

    let result = repl.run().await;
    match &result {
        Ok(()) => tracing::info!("Shutdown complete"),
        Err(e) => tracing::error!("Chat loop error: {e}"),
    }
    // Flush pending log lines before a possible exit()
    drop(log_guard);
    if let Err(e) = result {
        eprintln!("qabot: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_tokens_means_provider_default() {
        let config = QabotConfig::default();
        assert_eq!(connect_options(&config).max_tokens, None);

        let mut config = QabotConfig::default();
        config.model.max_tokens = 512;
        assert_eq!(connect_options(&config).max_tokens, Some(512));
    }

    #[test]
    fn connect_options_follow_api_section() {
        let mut config = QabotConfig::default();
        config.api.request_timeout_secs = 30;
        config.api.verify_on_init = false;
        let options = connect_options(&config);
        assert_eq!(options.request_timeout, Duration::from_secs(30));
        assert!(!options.verify);
    }

    #[test]
    fn model_flag_beats_config() {
        let config = QabotConfig::default();
        assert_eq!(default_model(Some("gpt-4o"), &config), ModelId::Gpt4o);
        assert_eq!(default_model(None, &config), ModelId::Gpt4);
    }

    #[test]
    fn log_path_prefers_config_override() {
        let mut config = QabotConfig::default();
        config.logging.file = Some(PathBuf::from("/var/tmp/qabot-test.log"));
        assert_eq!(
            log_path(Some(&config)),
            Some(PathBuf::from("/var/tmp/qabot-test.log"))
        );
        // Without a usable config the platform default applies, when one exists
        assert_eq!(
            log_path(None),
            qabot_config::toml_loader::default_log_path().ok()
        );
    }

    #[test]
    fn fallback_notice_says_defaults_replaced_the_file() {
        let notice = config_fallback_notice(&ConfigError::ValidationError(
            "model.temperature = 9".into(),
        ));
        assert!(notice.contains("built-in defaults"));
        assert!(notice.contains("model.temperature = 9"));
    }

    #[test]
    fn bad_model_flag_falls_back_to_config() {
        let mut config = QabotConfig::default();
        config.model.default = "gpt-3.5-turbo".into();
        assert_eq!(default_model(Some("nope"), &config), ModelId::Gpt35Turbo);
    }
}
