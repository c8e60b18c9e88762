//! HttpChatBackend -- concrete [`ChatBackend`] for the `/chat` endpoint.
//!
//! Sends `POST {base}/chat` with `{"question": ...}` and expects
//! `{"answer": ...}` back. No authentication, no retries, and no request
//! timeout: a slow backend keeps the exchange in flight until it answers.

use reqwest::Url;
use tracing::debug;

use vgchat_core::chat::backend::ChatBackend;
use vgchat_types::chat::{ChatReply, ChatRequest};
use vgchat_types::error::ChatError;

/// Client for the assistant backend's `/chat` endpoint.
pub struct HttpChatBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChatBackend {
    /// Path appended to the configured base URL.
    const CHAT_PATH: &'static str = "chat";

    /// Create a client for `base_url` (e.g. `http://localhost:8000`).
    ///
    /// A trailing slash on the base is tolerated; a path prefix such as
    /// `https://host/api` is kept.
    pub fn new(base_url: &str) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vgchat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChatError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: Self::chat_endpoint(base_url)?,
        })
    }

    /// The full URL questions are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn chat_endpoint(base_url: &str) -> Result<Url, ChatError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ChatError::InvalidBaseUrl(base_url.to_string()));
        }

        // Url::join replaces the last segment unless the base ends in '/'.
        let base = format!("{}/", trimmed.trim_end_matches('/'));
        let base = Url::parse(&base).map_err(|_| ChatError::InvalidBaseUrl(base_url.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ChatError::InvalidBaseUrl(base_url.to_string()));
        }

        base.join(Self::CHAT_PATH)
            .map_err(|_| ChatError::InvalidBaseUrl(base_url.to_string()))
    }
}

impl ChatBackend for HttpChatBackend {
    fn describe(&self) -> String {
        self.endpoint.to_string()
    }

    async fn ask(&self, question: &str) -> Result<ChatReply, ChatError> {
        let body = ChatRequest {
            question: question.to_string(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(status = status.as_u16(), bytes = text.len(), "Backend responded");

        serde_json::from_str::<ChatReply>(&text)
            .map_err(|e| ChatError::Decode(format!("failed to parse response: {e}")))
    }
}
