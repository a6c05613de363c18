//! OpenAI chat-completion client
//!
//! Implements the [`ChatCompletion`] trait against any OpenAI-compatible
//! `/chat/completions` endpoint. The trait keeps the provider swappable in
//! tests.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{ChatError, Result};
use crate::config::TripAiConfig;

/// Trait for chat-completion providers
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Submit a system/user message pair and return the reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Chat-completion client for the OpenAI API
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completion response body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiChatClient {
    /// Create a new client
    pub fn new(config: &TripAiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.openai.timeout_seconds.into()))
            .user_agent(concat!("TripAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.openai.base_url.clone(),
            api_key: config.openai.api_key.clone(),
            model: config.openai.model.clone(),
            temperature: config.openai.temperature,
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            model = %self.model,
            prompt_len = user.len(),
            "Sending chat completion request"
        );

        let mut http_request = self.client.post(&url).json(&request);
        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| ChatError::NetworkError(format!("Completion request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return match status.as_u16() {
                401 => Err(ChatError::AuthenticationError(
                    "Invalid or missing OpenAI API key".to_string(),
                )),
                429 => Err(ChatError::RateLimitError(
                    "OpenAI rate limit exceeded".to_string(),
                )),
                _ => Err(ChatError::ApiError(format!(
                    "OpenAI API error {status}: {error_text}"
                ))),
            };
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            ChatError::ParseError(format!("Failed to parse completion response: {e}"))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatError::ParseError("No choices in completion response".to_string()))
    }
}
