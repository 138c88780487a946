//! OpenAI chat-completions client.
//!
//! Implements the `AiClient` trait against any OpenAI-compatible
//! `/chat/completions` endpoint, authenticated with a bearer API key.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::{OpenAiConfig, DEFAULT_BASE_URL};
