use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use super::traits::{CompletionRequest, LanguageModel};
use crate::config::Config;
use crate::error::AppError;

/// Client for an OpenAI-compatible `chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Creates a client from the application configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            request_timeout: config.request_timeout(),
        }
    }

    fn build_request(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<reqwest::RequestBuilder, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let auth_value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|e| AppError::Config(format!("Invalid API key header: {}", e)))?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(self
            .client
            .post(format!("{}/{}", self.base_url, endpoint))
            .headers(headers)
            .json(payload))
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    fn name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model, prompt_chars = request.prompt.len()))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        info!("Requesting completion");

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.prompt },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        let request_future = self.build_request("chat/completions", &payload)?.send();
        let res = timeout(self.request_timeout, request_future).await??;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!("Completion request failed with status {}", status);
            return Err(AppError::Model(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let body = res.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::MalformedResponse("response has no message content".to_string())
            })?;

        debug!("Completion received: {} characters", content.len());
        Ok(content.trim().to_string())
    }
}
