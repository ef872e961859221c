//! Anthropic Messages API client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use mz_config::LlmConfig;
use mz_core::entities::Message;
use mz_core::enums::Role;

use crate::ChatBackend;
use crate::error::ChatError;
use crate::http::check_response;

const API_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl MessagesResponse {
    fn first_text(self) -> Option<String> {
        self.content.into_iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
    }
}

/// HTTP client for the Anthropic Messages API.
pub struct AnthropicClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl AnthropicClient {
    /// Build a client from the `llm` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::MissingApiKey`] when no key is configured, or
    /// [`ChatError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, ChatError> {
        if !config.is_configured() {
            return Err(ChatError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("mz/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        info!(model = %config.model, "chat client initialized");
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Get the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body<'a>(&'a self, transcript: &'a [Message]) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: &self.config.system_prompt,
            messages: transcript
                .iter()
                .map(|message| WireMessage {
                    role: message.role,
                    content: &message.content,
                })
                .collect(),
        }
    }
}

impl ChatBackend for AnthropicClient {
    async fn reply(&self, transcript: &[Message]) -> Result<String, ChatError> {
        info!(messages = transcript.len(), "sending transcript to model");

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request_body(transcript))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: MessagesResponse = resp.json().await?;
        let text = data.first_text().ok_or(ChatError::EmptyReply)?;

        debug!(chars = text.len(), "received model reply");
        Ok(text)
    }
}
