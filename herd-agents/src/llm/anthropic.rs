use async_trait::async_trait;
use serde::Deserialize;

use super::{CompletionClient, CompletionError, CompletionRequest};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// The provider's distinguished "service overloaded" status.
const OVERLOADED_STATUS: u16 = 529;

/// reqwest-backed client for the Anthropic Messages API.
pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        AnthropicClient {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = serde_json::json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "messages": [{ "role": "user", "content": request.prompt }],
        });

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status == OVERLOADED_STATUS {
            return Err(CompletionError::Overloaded);
        }
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, message });
        }

        let reply: MessagesResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let text = reply
            .content
            .first()
            .map(|block| block.text.clone())
            .unwrap_or_default();

        // An empty reply still has to be parseable downstream.
        if text.is_empty() {
            Ok("{}".to_string())
        } else {
            Ok(text)
        }
    }
}
