//! Sessions keyed by id, owned by whichever layer hosts them.

use std::collections::HashMap;

use qabot_common::{QabotError, SessionId};

use crate::session::Session;

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a session and return its id.
    pub fn insert(&mut self, session: Session) -> SessionId {
        let id = session.id().clone();
        self.sessions.insert(id.clone(), session);
        id
    }

    pub fn get(&self, id: &SessionId) -> Result<&Session, QabotError> {
        self.sessions
            .get(id)
            .ok_or_else(|| QabotError::SessionNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Result<&mut Session, QabotError> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| QabotError::SessionNotFound(id.to_string()))
    }

    /// End a session; its state is dropped with it.
    pub fn remove(&mut self, id: &SessionId) -> Option<Session> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut registry = SessionRegistry::new();
        let id = registry.insert(Session::new("hi"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().messages().len(), 1);

        let removed = registry.remove(&id).unwrap();
        assert_eq!(removed.id(), &id);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn unknown_id_is_session_not_found() {
        let mut registry = SessionRegistry::new();
        let err = registry.get_mut(&SessionId::new()).unwrap_err();
        assert!(matches!(err, QabotError::SessionNotFound(_)));
    }

    #[test]
    fn sessions_are_independent() {
        let mut registry = SessionRegistry::new();
        let a = registry.insert(Session::new("a"));
        let b = registry.insert(Session::new("b"));
        assert_ne!(a, b);
        assert_eq!(registry.get(&a).unwrap().messages()[0].content, "a");
        assert_eq!(registry.get(&b).unwrap().messages()[0].content, "b");
    }
}
