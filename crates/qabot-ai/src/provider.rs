//! Builds a ready-to-use completion client from a credential and model.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::openai::{OpenAiClient, OpenAiConfig};
use crate::{AiClient, AiError, ModelId};

/// Creates completion clients on demand, one per initialize action.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn connect(&self, credential: &str, model: ModelId)
        -> Result<Arc<dyn AiClient>, AiError>;
}

/// Endpoint settings shared by every client a provider builds.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub base_url: String,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Round-trip to the API before handing the client out.
    pub verify: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            base_url: crate::openai::DEFAULT_BASE_URL.to_string(),
            temperature: 0.0,
            max_tokens: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            verify: true,
        }
    }
}

/// Provider for OpenAI-compatible endpoints.
#[derive(Debug, Clone, Default)]
pub struct OpenAiProvider {
    options: ConnectOptions,
}

impl OpenAiProvider {
    pub fn new(options: ConnectOptions) -> Self {
        Self { options }
    }

    fn client_config(&self, credential: &str, model: ModelId) -> OpenAiConfig {
        OpenAiConfig::new(credential, model.as_str())
            .with_base_url(self.options.base_url.clone())
            .with_temperature(self.options.temperature)
            .with_max_tokens(self.options.max_tokens)
            .with_timeouts(self.options.connect_timeout, self.options.request_timeout)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn connect(
        &self,
        credential: &str,
        model: ModelId,
    ) -> Result<Arc<dyn AiClient>, AiError> {
        let client = OpenAiClient::new(self.client_config(credential, model))?;

        if self.options.verify {
            client.verify().await?;
            info!(%model, "OpenAI credential verified");
        } else {
            debug!(%model, "skipping credential verification");
        }

        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_config_carries_options() {
        let provider = OpenAiProvider::new(ConnectOptions {
            base_url: "http://localhost:8080/v1".into(),
            temperature: 0.3,
            max_tokens: Some(64),
            verify: false,
            ..ConnectOptions::default()
        });
        let config = provider.client_config("sk-x", ModelId::Gpt35Turbo);
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_tokens, Some(64));
        assert_eq!(config.api_key, "sk-x");
    }

    #[tokio::test]
    async fn connect_without_verification_makes_no_request() {
        // Nothing listens on port 9, so any request would fail.
        let provider = OpenAiProvider::new(ConnectOptions {
            base_url: "http://127.0.0.1:9/v1".into(),
            verify: false,
            ..ConnectOptions::default()
        });
        let client = provider.connect("sk-x", ModelId::Gpt4o).await.unwrap();
        assert_eq!(client.model(), "gpt-4o");
    }

    #[tokio::test]
    async fn connect_with_verification_reports_unreachable_endpoint() {
        let provider = OpenAiProvider::new(ConnectOptions {
            base_url: "http://127.0.0.1:1/v1".into(),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
            verify: true,
            ..ConnectOptions::default()
        });
        let result = provider.connect("sk-x", ModelId::Gpt4).await;
        assert!(matches!(
            result,
            Err(AiError::NetworkError(_)) | Err(AiError::Timeout)
        ));
    }
}
