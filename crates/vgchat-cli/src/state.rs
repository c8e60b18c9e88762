//! Application state wiring configuration and the backend together.
//!
//! `AppState` resolves configuration once at startup and builds the chat
//! service pinned to the HTTP backend.

use std::time::Duration;

use vgchat_core::chat::service::ChatService;
use vgchat_core::chat::suggestions::Suggestions;
use vgchat_infra::config::{load_client_config, resolve_api_base};
use vgchat_infra::http::HttpChatBackend;
use vgchat_types::config::ClientConfig;

use crate::cli::Cli;

/// Chat service pinned to the concrete HTTP backend.
pub type ConcreteChatService = ChatService<HttpChatBackend>;

/// Resolved startup configuration.
pub struct AppState {
    pub config: ClientConfig,
    pub api_base: String,
}

impl AppState {
    /// Load `config.toml`, apply command-line and environment overrides,
    /// and resolve the backend base URL.
    pub async fn init(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = load_client_config(cli.config.as_deref()).await?;
        if let Some(delay) = cli.typing_delay_ms {
            config.typing_delay_ms = delay;
        }

        let api_base = resolve_api_base(cli.api_base.as_deref(), &config)?;
        tracing::debug!(api_base = %api_base, "Configuration resolved");

        Ok(Self { config, api_base })
    }

    /// Build a fresh chat service (empty conversation) against the backend.
    pub fn chat_service(&self) -> anyhow::Result<ConcreteChatService> {
        let backend = HttpChatBackend::new(&self.api_base)?;
        Ok(ChatService::new(backend)
            .with_typing_delay(Duration::from_millis(self.config.typing_delay_ms)))
    }

    pub fn suggestions(&self) -> Suggestions {
        Suggestions::new(self.config.suggestions.clone())
    }
}
