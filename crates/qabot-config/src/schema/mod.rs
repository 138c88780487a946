//! Configuration schema types for qabot.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod model;
mod system;

pub use chat::*;
pub use model::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for qabot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct QabotConfig {
    pub chat: ChatConfig,
    pub model: ModelConfig,
    pub api: ApiConfig,
    pub memory: MemoryConfig,
    pub retrieval: RetrievalConfig,
    pub logging: LoggingConfig,
}
