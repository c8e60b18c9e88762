//! Chat service: one conversation bound to one backend.
//!
//! `ChatService::submit` is the whole client-side exchange: append the user
//! message, ask the backend, hold the reply back until the typing delay
//! has elapsed, then append exactly one assistant message.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use vgchat_types::chat::{ChatMessage, ChatReply};
use vgchat_types::error::SubmitRejection;

use super::backend::ChatBackend;
use super::conversation::Conversation;

/// Drives exchanges between a [`Conversation`] and a [`ChatBackend`].
pub struct ChatService<B> {
    backend: B,
    conversation: Conversation,
    typing_delay: Duration,
    last_reply: Option<ChatReply>,
}

impl<B: ChatBackend> ChatService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            conversation: Conversation::new(),
            typing_delay: Duration::ZERO,
            last_reply: None,
        }
    }

    /// Minimum time between sending a question and revealing its reply.
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The most recent successful reply, including any SQL it reported.
    pub fn last_reply(&self) -> Option<&ChatReply> {
        self.last_reply.as_ref()
    }

    /// Run one exchange.
    ///
    /// Returns the appended assistant message (the answer or the fallback),
    /// or the rejection if the text was blank or an exchange was pending.
    pub async fn submit(&mut self, text: &str) -> Result<&ChatMessage, SubmitRejection> {
        let pending = self.conversation.begin_exchange(text)?;
        let started = Instant::now();

        debug!(backend = %self.backend.describe(), chars = text.chars().count(), "Sending question");
        let outcome = self.backend.ask(pending.question()).await;

        match &outcome {
            Ok(reply) => {
                debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    has_sql = reply.sql.is_some(),
                    "Reply received"
                );
                self.last_reply = Some(reply.clone());
            }
            Err(e) => warn!(error = %e, "Exchange failed, showing fallback"),
        }

        let remaining = self.typing_delay.saturating_sub(started.elapsed());
        if !remaining.is_zero() {
            tokio::time::sleep(remaining).await;
        }

        Ok(self.conversation.complete_exchange(pending, outcome))
    }

    /// Empty the conversation and forget the last reply.
    pub fn clear(&mut self) {
        self.conversation.clear();
        self.last_reply = None;
    }
}
