//! Client for the external chat completion service.
//!
//! The service exposes a single endpoint, `POST {base}/api/chat`, which takes
//! one user message and answers with `{ "response": "..." }`. Failures may
//! carry a `detail` field with a human-readable reason.

use crate::config::Config;
use crate::message::Role;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the chat endpoint relative to the base URL.
pub const CHAT_PATH: &str = "/api/chat";

/// Something that turns one user message into an assistant reply.
///
/// Implemented by [`HttpChatClient`] for the real service; tests substitute
/// their own implementation.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `content` as the only message and return the reply text.
    async fn complete(&self, content: &str) -> Result<String, ChatError>;
}

/// Request body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    messages: [WireMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// Build a request carrying a single user message and no history.
    pub fn single(content: &'a str) -> Self {
        Self {
            messages: [WireMessage {
                role: Role::User,
                content,
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Reduce the `detail` field to display text. Empty strings count as absent.
    fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

/// Join a base URL and the chat path, tolerating a trailing slash.
pub fn chat_endpoint(base_url: &str) -> String {
    format!("{}{CHAT_PATH}", base_url.trim_end_matches('/'))
}

/// HTTP implementation of [`ChatClient`].
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatClient {
    /// Create a client for the service at `base_url` with no request timeout.
    pub fn new(base_url: &str) -> Result<Self, ChatError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client with an optional transport timeout.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ChatError::Build)?;

        Ok(Self {
            client,
            endpoint: chat_endpoint(base_url),
        })
    }

    /// Create a client from the resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self, ChatError> {
        Self::with_timeout(&config.api_url, config.request_timeout())
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn complete(&self, content: &str) -> Result<String, ChatError> {
        debug!(endpoint = %self.endpoint, len = content.len(), "sending chat request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest::single(content))
            .send()
            .await
            .map_err(ChatError::Http)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ChatError::Http)?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_detail);
            warn!(status = status.as_u16(), has_detail = detail.is_some(), "chat request rejected");
            return Err(ChatError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: ChatResponse = serde_json::from_slice(&body).map_err(ChatError::Decode)?;
        debug!(status = status.as_u16(), len = parsed.response.len(), "chat reply received");
        Ok(parsed.response)
    }
}

/// Errors reported by a [`ChatClient`].
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Transport failure: connection refused, timeout, broken body.
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Reason supplied by the service, if any.
        detail: Option<String>,
    },

    /// A success response whose body was not `{ "response": string }`.
    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Reported by non-HTTP clients.
    #[error("{0}")]
    Other(String),
}

impl ChatError {
    /// Human-readable reason supplied by the service.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
