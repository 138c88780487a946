//! Conversation memory, retrieval, and logging settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Conversation memory bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Turns of history sent with each question (valid range: 0-500, 0 = unbounded).
    pub max_turns: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { max_turns: 20 }
    }
}

/// Document retrieval. No retriever backend ships, so this stays off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct RetrievalConfig {
    pub enabled: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this crate family.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "qabot=debug",
            LogLevel::Info => "qabot=info",
            LogLevel::Warning => "qabot=warn",
            LogLevel::Error => "qabot=error",
        }
    }
}

/// Logging configuration.
///
/// Logs always go to a file; the chat terminal only shows chat output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file override. Unset means `<data_local_dir>/qabot/qabot.log`.
    pub file: Option<PathBuf>,
}
