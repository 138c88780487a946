//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# qabot configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The API key is never read from this file.

[chat]
# title = "GPT-4 Chatbot Q&A"
# greeting = "안녕하세요! 무엇을 도와드릴까요? 😊"
# input_placeholder = "질문을 입력해주세요."
# not_initialized_notice = "The conversation is not initialized yet. Run /init with your OpenAI API key first."
# apology = "Sorry, I could not get an answer this time. Please try again."
# system_prompt = "You are a helpful assistant."

[model]
# default = "gpt-4"        # gpt-4, gpt-4o, gpt-3.5-turbo
# temperature = 0.0        # 0.0-2.0
# max_tokens = 0           # 0 = provider default

[api]
# base_url = "https://api.openai.com/v1"
# api_key_env = "OPENAI_API_KEY"
# connect_timeout_secs = 10   # 1-120
# request_timeout_secs = 120  # 5-600
# verify_on_init = true

[memory]
# max_turns = 20           # 0-500, 0 = unbounded

[retrieval]
# enabled = false          # no retriever backend is available

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
# file = "/tmp/qabot.log"  # default: qabot/qabot.log under the local data dir
"##
    .to_string()
}
