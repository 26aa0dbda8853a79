//! LLM Client — the single point of entry for all Mistral API calls.
//!
//! No other module may call the provider directly. Handlers and the RAG
//! pipeline depend on the `TextGenerator` trait, which `MistralClient` implements.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// An opaque text-generation provider.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`, bounded by `max_length` output tokens.
    /// The provider's output is returned verbatim.
    async fn generate_text(&self, prompt: &str, max_length: u32) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct MistralError {
    message: String,
}

/// Wraps the Mistral chat-completions API. One request per call; no retries.
#[derive(Clone)]
pub struct MistralClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl MistralClient {
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
            model,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Self::new(
            config.mistral_api_url.clone(),
            config.mistral_api_key.clone(),
            config.mistral_model.clone(),
            Duration::from_secs(config.mistral_timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw call to the chat-completions endpoint, returning the full response object.
    pub async fn call(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
        };

        debug!(
            "Calling {} (prompt_chars={}, max_tokens={})",
            self.model,
            prompt.chars().count(),
            max_tokens
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Mistral errors carry a top-level `message`; fall back to the raw body
            let message = serde_json::from_str::<MistralError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl TextGenerator for MistralClient {
    async fn generate_text(&self, prompt: &str, max_length: u32) -> Result<String, LlmError> {
        let completion = self.call(prompt, max_length).await?;
        completion
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}
