//! OpenRouter chat-completion client
//!
//! Speaks the OpenAI-style `/chat/completions` wire format. The client is
//! cheap to clone (it shares the underlying `reqwest` pool) and holds the
//! API key as optional state: a missing key fails the call, not startup.

use crate::error::UpstreamError;
use crate::SceneModel;
use async_trait::async_trait;
use scenecraft_core::{Config, PromptPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    stop: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Client for the OpenRouter chat-completion API
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenRouterClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns [`UpstreamError::Transport`] if the HTTP client cannot be
    /// constructed (TLS backend failure).
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Model identifier sent with every request
    #[inline]
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl SceneModel for OpenRouterClient {
    async fn complete(&self, payload: &PromptPayload) -> Result<String, UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: payload.system_instruction(),
                },
                ChatMessage {
                    role: "user",
                    content: payload.scene(),
                },
            ],
            stop: payload.stop_sequences(),
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Drop the provider's error body; only the status travels up.
            tracing::warn!(status = status.as_u16(), "upstream call failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response.json().await?;
        let completion = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(UpstreamError::EmptyCompletion)?;

        Ok(completion.trim().to_owned())
    }
}
