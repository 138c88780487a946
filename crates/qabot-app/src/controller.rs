//! Session controller: initialization and turn handling.
//!
//! Every failure is absorbed here. Callers see a displayed notice or an
//! assistant message, never an error escaping a turn.

use std::sync::Arc;

use qabot_ai::{AiError, ChainOptions, CompletionProvider, ConversationChain, Message, ModelId};
use qabot_common::new_correlation_id;
use qabot_config::schema::ChatConfig;
use qabot_config::QabotConfig;
use tracing::{debug, info, warn};

use crate::display::{DisplaySurface, NoticeLevel};
use crate::handle::ConversationHandle;
use crate::session::Session;

const WORKING_LABEL: &str = "Thinking...";

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("no API key supplied")]
    MissingCredential,
    #[error("could not initialize conversation: {0}")]
    Connect(#[from] AiError),
}

/// Why a turn produced no model answer.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("conversation not initialized")]
    NotInitialized,
    #[error("completion failed: {0}")]
    Completion(#[from] AiError),
}

/// What happened to a submitted turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Answered,
    NotInitialized,
    Failed,
}

pub struct SessionController {
    provider: Arc<dyn CompletionProvider>,
    display: Arc<dyn DisplaySurface>,
    chat: ChatConfig,
    chain_options: ChainOptions,
}

impl SessionController {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        display: Arc<dyn DisplaySurface>,
        config: &QabotConfig,
    ) -> Self {
        Self {
            provider,
            display,
            chat: config.chat.clone(),
            chain_options: ChainOptions {
                retrieval_enabled: config.retrieval.enabled,
                max_turns: config.memory.max_turns as usize,
                system_prompt: config.chat.system_prompt.clone(),
            },
        }
    }

    /// A fresh session seeded with the greeting.
    pub fn new_session(&self) -> Session {
        Session::new(self.chat.greeting.clone())
    }

    /// Build a conversation handle without touching any session.
    pub async fn connect(
        &self,
        credential: &str,
        model: ModelId,
    ) -> Result<ConversationHandle, InitError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(InitError::MissingCredential);
        }

        self.chain_options.ensure_supported()?;
        let client = self.provider.connect(credential, model).await?;
        let chain = ConversationChain::from_client(client, self.chain_options.clone())?;
        Ok(ConversationHandle::new(chain, model))
    }

    /// Replace the session's conversation with a new one.
    ///
    /// Any previous handle is dropped, together with the history it
    /// remembered. The displayed messages are kept.
    pub async fn initialize_conversation(
        &self,
        session: &mut Session,
        credential: &str,
        model: ModelId,
    ) -> Result<(), InitError> {
        match self.connect(credential, model).await {
            Ok(handle) => {
                session.install(handle);
                info!(session = %session.id().short(), %model, "conversation initialized");
                self.display.notify(
                    NoticeLevel::Info,
                    &format!("Conversation initialized with {model}."),
                );
                Ok(())
            }
            Err(InitError::MissingCredential) => {
                session.fail_init(InitError::MissingCredential.to_string());
                debug!(session = %session.id().short(), "initialization refused: no API key");
                self.display
                    .notify(NoticeLevel::Error, &self.chat.missing_key_notice);
                Err(InitError::MissingCredential)
            }
            Err(e) => {
                session.fail_init(e.to_string());
                warn!(session = %session.id().short(), %model, error = %e, "initialization failed");
                self.display
                    .notify(NoticeLevel::Error, &self.chat.init_failed_notice);
                Err(e)
            }
        }
    }

    /// Record a user message and exactly one assistant reply.
    pub async fn submit_turn(&self, session: &mut Session, user_text: &str) -> TurnOutcome {
        let turn = new_correlation_id();
        let user = Message::user(user_text);
        self.display.show_message(&user);

        let (reply, outcome) = match self.answer(session, user_text).await {
            Ok(answer) => (answer, TurnOutcome::Answered),
            Err(TurnError::NotInitialized) => {
                debug!(%turn, session = %session.id().short(), "turn before initialization");
                (
                    self.chat.not_initialized_notice.clone(),
                    TurnOutcome::NotInitialized,
                )
            }
            Err(e) => {
                warn!(%turn, session = %session.id().short(), error = %e, "turn failed");
                (self.chat.apology.clone(), TurnOutcome::Failed)
            }
        };

        let assistant = Message::assistant(reply);
        self.display.show_message(&assistant);
        session.push_turn(user, assistant);
        outcome
    }

    async fn answer(&self, session: &mut Session, question: &str) -> Result<String, TurnError> {
        let handle = session.ready_handle().ok_or(TurnError::NotInitialized)?;

        self.display.begin_working(WORKING_LABEL);
        let result = handle.ask(question).await;
        self.display.end_working();

        Ok(result?)
    }

    /// Start the conversation over from the greeting.
    ///
    /// The handle stays initialized but no longer replays earlier turns.
    pub fn clear_history(&self, session: &mut Session) {
        session.restart(self.chat.greeting.clone());
        debug!(session = %session.id().short(), "history cleared");
    }

    /// Re-render every message in order.
    pub fn render(&self, session: &Session) {
        for message in session.messages() {
            self.display.show_message(message);
        }
    }

    pub fn display(&self) -> &Arc<dyn DisplaySurface> {
        &self.display
    }
}
