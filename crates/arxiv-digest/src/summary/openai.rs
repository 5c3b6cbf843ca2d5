//! Live chat-completion source.

use reqwest::Client;

use super::{ChatRequest, ChatResponse, CompletionSource};
use crate::config::Config;
use crate::error::{ClientError, SummaryError, SummaryResult};

/// Completion source backed by the OpenAI chat-completions endpoint.
pub struct OpenAiSource {
    client: Client,
    api_url: String,
    api_key: String,
}

impl OpenAiSource {
    /// Create a live source from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if no API key is configured or HTTP client
    /// initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("an OpenAI API key is required for live mode"))?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { client, api_url: config.openai_api_url.clone(), api_key })
    }
}

#[async_trait::async_trait]
impl CompletionSource for OpenAiSource {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: &ChatRequest) -> SummaryResult<ChatResponse> {
        tracing::debug!(model = %request.model, "requesting structured completion");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::unexpected_status(status.as_u16(), message).into());
        }

        let body = response.text().await.map_err(ClientError::from)?;
        serde_json::from_str(&body)
            .map_err(|e| SummaryError::malformed(format!("response body is not valid JSON: {e}")))
    }
}

impl std::fmt::Debug for OpenAiSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSource").field("api_url", &self.api_url).finish()
    }
}
