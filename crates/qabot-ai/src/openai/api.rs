//! AiClient trait implementation for OpenAiClient, plus key verification.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::{status_error, OpenAiClient};

#[async_trait]
impl AiClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "OpenAI chat request"
        );

        let response = self
            .http
            .post(self.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}

impl OpenAiClient {
    /// Check that the key is accepted and the model is visible to it.
    pub async fn verify(&self) -> Result<(), AiError> {
        debug!(model = %self.config.model, "verifying OpenAI credential");

        let response = self
            .http
            .get(self.model_url())
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AiError::Unsupported(format!(
                "model '{}' is not available for this key",
                self.config.model
            )));
        }
        Err(status_error(status, &text))
    }
}
