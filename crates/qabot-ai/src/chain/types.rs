//! Chain request/response and construction options.

use crate::AiError;

/// A single question put to the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRequest {
    pub question: String,
}

impl ChainRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// The chain's answer, passed through from the model unaltered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainResponse {
    pub answer: String,
}

/// How a chain is assembled.
#[derive(Debug, Clone, Default)]
pub struct ChainOptions {
    /// Document retrieval; no retriever backend exists, so `true` is refused.
    pub retrieval_enabled: bool,
    /// Turns of history kept in memory, 0 for unbounded.
    pub max_turns: usize,
    /// Prepended to every request when set.
    pub system_prompt: Option<String>,
}

impl ChainOptions {
    /// Refuse options no chain can be built with.
    pub fn ensure_supported(&self) -> Result<(), AiError> {
        if self.retrieval_enabled {
            return Err(AiError::Unsupported(
                "retrieval is enabled but no retriever is configured".into(),
            ));
        }
        Ok(())
    }
}
