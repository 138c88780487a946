//! Conversation chain: a completion client plus buffer memory.
//!
//! A `ConversationChain` answers one question at a time, sending the
//! windowed history from its `BufferMemory` along with each question.

mod conversation;
mod memory;
mod types;

pub use conversation::ConversationChain;
pub use memory::BufferMemory;
pub use types::{ChainOptions, ChainRequest, ChainResponse};
