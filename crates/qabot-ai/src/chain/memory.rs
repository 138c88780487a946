//! Windowed conversation buffer.

use std::collections::VecDeque;

use crate::Message;

/// Question/answer pairs replayed to the model as history.
///
/// Holds at most `max_turns` exchanges, dropping the oldest first.
/// `max_turns == 0` keeps everything.
#[derive(Debug, Clone, Default)]
pub struct BufferMemory {
    turns: VecDeque<(String, String)>,
    max_turns: usize,
}

impl BufferMemory {
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: VecDeque::new(),
            max_turns,
        }
    }

    pub fn record(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push_back((question.into(), answer.into()));
        if self.max_turns > 0 {
            while self.turns.len() > self.max_turns {
                self.turns.pop_front();
            }
        }
    }

    /// History as alternating user/assistant messages, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.turns
            .iter()
            .flat_map(|(q, a)| [Message::user(q.clone()), Message::assistant(a.clone())])
            .collect()
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Forget every remembered turn. The window size is kept.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
