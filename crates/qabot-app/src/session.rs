//! Per-user chat session state.

use qabot_ai::Message;
use qabot_common::SessionId;

use crate::handle::ConversationHandle;

/// Outcome of the most recent initialize action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitState {
    #[default]
    NotAttempted,
    Succeeded,
    Failed,
}

/// One user's conversation: display history plus the conversation handle.
///
/// `messages` is append-only between clears and always holds the greeting
/// followed by complete user/assistant pairs.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    messages: Vec<Message>,
    handle: Option<ConversationHandle>,
    init_state: InitState,
    last_init_error: Option<String>,
}

impl Session {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            messages: vec![Message::assistant(greeting)],
            handle: None,
            init_state: InitState::NotAttempted,
            last_init_error: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn init_state(&self) -> InitState {
        self.init_state
    }

    pub fn handle(&self) -> Option<&ConversationHandle> {
        self.handle.as_ref()
    }

    /// Detailed reason for the last failed initialization, for diagnostics.
    pub fn last_init_error(&self) -> Option<&str> {
        self.last_init_error.as_deref()
    }

    /// True when a turn may call the completion capability.
    pub fn is_ready(&self) -> bool {
        self.init_state == InitState::Succeeded && self.handle.is_some()
    }

    pub(crate) fn ready_handle(&mut self) -> Option<&mut ConversationHandle> {
        if self.init_state == InitState::Succeeded {
            self.handle.as_mut()
        } else {
            None
        }
    }

    /// Append a complete turn.
    pub(crate) fn push_turn(&mut self, user: Message, assistant: Message) {
        self.messages.push(user);
        self.messages.push(assistant);
    }

    pub(crate) fn install(&mut self, handle: ConversationHandle) {
        self.handle = Some(handle);
        self.init_state = InitState::Succeeded;
        self.last_init_error = None;
    }

    /// Drop any handle and record why initialization failed.
    pub(crate) fn fail_init(&mut self, reason: String) {
        self.handle = None;
        self.init_state = InitState::Failed;
        self.last_init_error = Some(reason);
    }

    /// Back to the greeting alone; the handle, if any, forgets its history.
    pub(crate) fn restart(&mut self, greeting: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::assistant(greeting));
        if let Some(handle) = self.handle.as_mut() {
            handle.forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qabot_ai::Role;

    #[test]
    fn new_session_holds_only_greeting() {
        let session = Session::new("hello!");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, "hello!");
        assert_eq!(session.init_state(), InitState::NotAttempted);
        assert!(!session.is_ready());
    }

    #[test]
    fn fail_init_records_reason() {
        let mut session = Session::new("hi");
        session.fail_init("HTTP 401".into());
        assert_eq!(session.init_state(), InitState::Failed);
        assert_eq!(session.last_init_error(), Some("HTTP 401"));
        assert!(session.handle().is_none());
        assert!(session.ready_handle().is_none());
    }

    #[test]
    fn restart_keeps_init_state() {
        let mut session = Session::new("hi");
        session.push_turn(Message::user("q"), Message::assistant("a"));
        session.fail_init("x".into());
        session.restart("welcome back");
        assert_eq!(session.messages(), &[Message::assistant("welcome back")]);
        assert_eq!(session.init_state(), InitState::Failed);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(Session::new("a").id(), Session::new("a").id());
    }
}
