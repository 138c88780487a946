//! Conversation chain struct and its `invoke` loop.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::{AiClient, AiError, Message};

use super::memory::BufferMemory;
use super::types::{ChainOptions, ChainRequest, ChainResponse};

/// A completion client bound to its own conversation memory.
pub struct ConversationChain {
    client: Arc<dyn AiClient>,
    memory: BufferMemory,
    system_prompt: Option<String>,
    tracker: TokenTracker,
}

impl ConversationChain {
    /// Assemble a chain around an already-connected client.
    pub fn from_client(client: Arc<dyn AiClient>, options: ChainOptions) -> Result<Self, AiError> {
        options.ensure_supported()?;

        Ok(Self {
            client,
            memory: BufferMemory::new(options.max_turns),
            system_prompt: options.system_prompt,
            tracker: TokenTracker::new(),
        })
    }

    /// Answer a question using the remembered history.
    ///
    /// Memory only records the exchange when the call succeeds.
    pub async fn invoke(&mut self, request: ChainRequest) -> Result<ChainResponse, AiError> {
        let messages = self.build_messages(&request.question);

        debug!(
            model = %self.client.model(),
            history_turns = self.memory.turn_count(),
            "invoking conversation chain"
        );

        let response = self.client.send_message(&messages).await?;
        self.tracker.record(&response.usage);
        self.memory.record(request.question, response.content.clone());

        Ok(ChainResponse {
            answer: response.content,
        })
    }

    fn build_messages(&self, question: &str) -> Vec<Message> {
        let mut msgs = Vec::new();
        if let Some(ref system) = self.system_prompt {
            msgs.push(Message::system(system.clone()));
        }
        msgs.extend(self.memory.messages());
        msgs.push(Message::user(question));
        msgs
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn memory(&self) -> &BufferMemory {
        &self.memory
    }

    /// Start the model's side of the conversation over.
    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}

impl fmt::Debug for ConversationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationChain")
            .field("model", &self.client.model())
            .field("memory_turns", &self.memory.turn_count())
            .field("system_prompt", &self.system_prompt.is_some())
            .finish()
    }
}
