//! ChatBackend trait definition.
//!
//! The one outbound call the client makes: send a question, receive an
//! answer. Implementations live in vgchat-infra (e.g., `HttpChatBackend`).

use vgchat_types::chat::ChatReply;
use vgchat_types::error::ChatError;

/// Trait for the remote service that answers questions.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). A single
/// call is one exchange: no retries, no timeout.
pub trait ChatBackend: Send + Sync {
    /// Human-readable description of where questions go (e.g. the URL).
    fn describe(&self) -> String;

    /// Send `question` and wait for the reply.
    fn ask(
        &self,
        question: &str,
    ) -> impl std::future::Future<Output = Result<ChatReply, ChatError>> + Send;
}
