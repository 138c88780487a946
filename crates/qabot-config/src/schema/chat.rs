//! Chat surface text: title, greeting, and the fixed notices shown in place
//! of an answer.

use serde::{Deserialize, Serialize};

/// Text shown by the chat surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub title: String,
    pub disclaimer: String,
    /// Seeded assistant message every new session starts with.
    pub greeting: String,
    pub input_placeholder: String,
    /// Assistant reply for a turn submitted before initialization.
    pub not_initialized_notice: String,
    /// Assistant reply for a turn whose completion call failed.
    pub apology: String,
    pub missing_key_notice: String,
    pub init_failed_notice: String,
    /// Optional system prompt prepended to every completion request.
    pub system_prompt: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: "GPT-4 Chatbot Q&A".into(),
            disclaimer: "주의! 이 챗봇은 참고용으로 사용하세요!".into(),
            greeting: "안녕하세요! 무엇을 도와드릴까요? 😊".into(),
            input_placeholder: "질문을 입력해주세요.".into(),
            not_initialized_notice:
                "The conversation is not initialized yet. Run /init with your OpenAI API key first."
                    .into(),
            apology: "Sorry, I could not get an answer this time. Please try again.".into(),
            missing_key_notice: "Please add your OpenAI API key to continue.".into(),
            init_failed_notice:
                "Could not initialize the conversation. Check your API key and model, then try again."
                    .into(),
            system_prompt: None,
        }
    }
}
