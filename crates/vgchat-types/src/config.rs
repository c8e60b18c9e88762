//! Client configuration types.
//!
//! `ClientConfig` represents the optional `config.toml` plus whatever the
//! environment and command line override. All fields except the backend
//! base URL have defaults matching the web widget.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the chat client.
///
/// Loaded from `<config dir>/vgchat/config.toml`. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend; `/chat` is appended.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Minimum time the typing indicator stays up before a reply is shown.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Show `HH:MM` next to each message.
    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,

    /// Label used for assistant messages.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Questions offered by `/suggest`.
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

fn default_typing_delay_ms() -> u64 {
    800
}

fn default_show_timestamps() -> bool {
    true
}

fn default_assistant_name() -> String {
    "ICS Assistant".to_string()
}

pub fn default_suggestions() -> Vec<String> {
    [
        "Giới thiệu về VietGuard",
        "AI SOC là gì?",
        "Chính sách bảo mật",
        "Dịch vụ của ICS",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            typing_delay_ms: default_typing_delay_ms(),
            show_timestamps: default_show_timestamps(),
            assistant_name: default_assistant_name(),
            suggestions: default_suggestions(),
        }
    }
}
