//! Opaque conversation handle held by a session.

use std::fmt;

use chrono::{DateTime, Local};
use qabot_ai::{AiError, ChainRequest, ConversationChain, ModelId, TokenTracker};

/// An initialized conversation bound to one credential and one model.
///
/// The credential lives inside the chain's client and never leaves it.
pub struct ConversationHandle {
    chain: ConversationChain,
    model: ModelId,
    created_at: DateTime<Local>,
}

impl ConversationHandle {
    pub(crate) fn new(chain: ConversationChain, model: ModelId) -> Self {
        Self {
            chain,
            model,
            created_at: Local::now(),
        }
    }

    pub(crate) async fn ask(&mut self, question: &str) -> Result<String, AiError> {
        let response = self.chain.invoke(ChainRequest::new(question)).await?;
        Ok(response.answer)
    }

    /// Drop the history replayed to the model. Usage totals are kept.
    pub(crate) fn forget(&mut self) {
        self.chain.clear_memory();
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn usage(&self) -> &TokenTracker {
        self.chain.tracker()
    }

    /// Turns currently replayed to the model as history.
    pub fn remembered_turns(&self) -> usize {
        self.chain.memory().turn_count()
    }
}

impl fmt::Debug for ConversationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationHandle")
            .field("model", &self.model)
            .field("created_at", &self.created_at)
            .field("remembered_turns", &self.remembered_turns())
            .finish()
    }
}
