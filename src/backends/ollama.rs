//! Ollama chat client used to grade answers.
//!
//! Talks to the `/api/chat` endpoint of a local Ollama server with streaming
//! disabled and folds every failure into a [`ChatOutcome`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, ChatOutcome, ChatRole, ModelClient};
use crate::error::EvalError;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Configuration for the Ollama client.
#[derive(Debug)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server, without the `/api/chat` path.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Client for interacting with a local Ollama server.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct Ollama {
    /// Shared configuration wrapped in Arc for cheap cloning.
    pub config: Arc<OllamaConfig>,
    /// HTTP client for making requests.
    pub client: Client,
}

#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Deserialize, Debug)]
struct OllamaResponseMessage {
    role: String,
    content: Option<String>,
}

impl Ollama {
    pub fn new(base_url: impl Into<String>, timeout_seconds: Option<u64>) -> Result<Self, EvalError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        Ok(Self::with_client(builder.build()?, base_url, timeout_seconds))
    }

    /// Creates a new Ollama client with a custom HTTP client.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        Self {
            config: Arc::new(OllamaConfig {
                base_url: base_url.into(),
                timeout_seconds,
            }),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.base_url.trim_end_matches('/'))
    }

    async fn send(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatOutcome, EvalError> {
        let body = OllamaChatRequest {
            model,
            messages,
            stream: false,
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("Ollama request payload: {}", json);
            }
        }

        let mut request = self.client.post(self.chat_url()).json(&body);
        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let resp = request.send().await?;
        log::debug!("Ollama HTTP status: {}", resp.status());

        let resp = resp.error_for_status()?;
        let raw = resp.text().await?;
        decode_reply(&raw)
    }
}

/// Decodes an `/api/chat` response body.
///
/// A body that is not JSON at all is an error; JSON of any other shape than
/// an assistant message is [`ChatOutcome::Unrecognized`].
pub(crate) fn decode_reply(raw: &str) -> Result<ChatOutcome, EvalError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let outcome = match serde_json::from_value::<OllamaChatResponse>(value) {
        Ok(OllamaChatResponse {
            message:
                OllamaResponseMessage {
                    role,
                    content: Some(content),
                },
        }) if role == ChatRole::Assistant.as_str() => ChatOutcome::AssistantReply(content),
        Ok(resp) => {
            log::debug!("Ollama reply without assistant content: {:?}", resp);
            ChatOutcome::Unrecognized
        }
        Err(err) => {
            log::debug!("Ollama reply does not match chat schema: {err}");
            ChatOutcome::Unrecognized
        }
    };
    Ok(outcome)
}

#[async_trait]
impl ModelClient for Ollama {
    /// Sends a non-streaming chat request to Ollama.
    ///
    /// # Arguments
    ///
    /// * `model` - Name of the model to run, e.g. `deepseek-r1:1.5b`
    /// * `messages` - The conversation to grade
    ///
    /// # Returns
    ///
    /// The assistant reply, or the reason none is available
    async fn evaluate(&self, model: &str, messages: &[ChatMessage]) -> ChatOutcome {
        match self.send(model, messages).await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("Ollama request to {} failed: {err}", self.chat_url());
                ChatOutcome::TransportError(transport_detail(err))
            }
        }
    }
}

fn transport_detail(err: EvalError) -> String {
    match err {
        EvalError::Http(detail) | EvalError::Json(detail) => detail,
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "ollama/tests.rs"]
mod tests;
