//! Conversation state machine.
//!
//! Holds the ordered message list and the in-flight flag. An exchange is
//! started with [`Conversation::begin_exchange`], which hands back a
//! [`PendingExchange`] token; the token is consumed by
//! [`Conversation::complete_exchange`], so every started exchange appends
//! exactly one assistant message.

use vgchat_types::chat::{ChatMessage, ChatReply};
use vgchat_types::error::{ChatError, SubmitRejection};

/// Assistant text appended when an exchange fails for any reason.
pub const FALLBACK_MESSAGE: &str = "❌ Lỗi kết nối backend. Vui lòng thử lại sau.";

/// An exchange that has been started but not yet completed.
///
/// Carries the question that must be sent to the backend.
#[derive(Debug)]
#[must_use = "an exchange must be completed or the conversation stays in flight"]
pub struct PendingExchange {
    question: String,
}

impl PendingExchange {
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// The ordered, append-only list of messages in this session.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether an exchange is awaiting its reply.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start an exchange.
    ///
    /// Appends the user message and marks the conversation in flight. Blank
    /// text and submissions while another exchange is pending are rejected
    /// without touching the message list.
    pub fn begin_exchange(&mut self, text: &str) -> Result<PendingExchange, SubmitRejection> {
        if text.trim().is_empty() {
            return Err(SubmitRejection::EmptyText);
        }
        if self.in_flight {
            return Err(SubmitRejection::InFlight);
        }

        self.messages.push(ChatMessage::user(text));
        self.in_flight = true;

        Ok(PendingExchange {
            question: text.to_string(),
        })
    }

    /// Finish an exchange with the backend's outcome.
    ///
    /// Appends the reply's answer, or [`FALLBACK_MESSAGE`] on failure, and
    /// clears the in-flight flag. Returns the appended message.
    pub fn complete_exchange(
        &mut self,
        pending: PendingExchange,
        outcome: Result<ChatReply, ChatError>,
    ) -> &ChatMessage {
        drop(pending);

        let text = match outcome {
            Ok(reply) => reply.answer,
            Err(_) => FALLBACK_MESSAGE.to_string(),
        };

        self.messages.push(ChatMessage::assistant(text));
        self.in_flight = false;

        &self.messages[self.messages.len() - 1]
    }

    /// Drop every message. The in-flight flag is left alone: a pending
    /// exchange still lands its reply in the emptied list.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgchat_types::chat::MessageOrigin;

    #[test]
    fn test_new_conversation_is_empty() {
        let conv = Conversation::new();
        assert!(conv.is_empty());
        assert!(!conv.is_in_flight());
    }

    #[test]
    fn test_begin_appends_user_message_before_reply() {
        let mut conv = Conversation::new();
        let pending = conv.begin_exchange("AI SOC là gì?").unwrap();

        assert_eq!(pending.question(), "AI SOC là gì?");
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].origin, MessageOrigin::User);
        assert_eq!(conv.messages()[0].text, "AI SOC là gì?");
        assert!(conv.is_in_flight());

        let _ = conv.complete_exchange(pending, Ok(ChatReply::new("ok")));
    }

    #[test]
    fn test_success_appends_answer_and_clears_flag() {
        let mut conv = Conversation::new();
        let pending = conv.begin_exchange("hello").unwrap();
        let appended = conv.complete_exchange(pending, Ok(ChatReply::new("xin chào")));

        assert_eq!(appended.origin, MessageOrigin::Assistant);
        assert_eq!(appended.text, "xin chào");
        assert_eq!(conv.len(), 2);
        assert!(!conv.is_in_flight());
    }

    #[test]
    fn test_failure_appends_fallback() {
        let mut conv = Conversation::new();
        let pending = conv.begin_exchange("hello").unwrap();
        conv.complete_exchange(pending, Err(ChatError::Transport("refused".to_string())));

        assert_eq!(conv.len(), 2);
        assert_eq!(conv.messages()[1].origin, MessageOrigin::Assistant);
        assert_eq!(conv.messages()[1].text, FALLBACK_MESSAGE);
        assert!(!conv.is_in_flight());
    }

    #[test]
    fn test_every_failure_kind_uses_same_fallback() {
        let errors = vec![
            ChatError::Transport("timeout".to_string()),
            ChatError::Status {
                status: 500,
                body: String::new(),
            },
            ChatError::Decode("missing field `answer`".to_string()),
            ChatError::InvalidBaseUrl("::".to_string()),
        ];

        for err in errors {
            let mut conv = Conversation::new();
            let pending = conv.begin_exchange("q").unwrap();
            assert_eq!(conv.complete_exchange(pending, Err(err)).text, FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let mut conv = Conversation::new();
        for text in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(conv.begin_exchange(text).unwrap_err(), SubmitRejection::EmptyText);
        }
        assert!(conv.is_empty());
        assert!(!conv.is_in_flight());
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut conv = Conversation::new();
        let pending = conv.begin_exchange("first").unwrap();

        assert_eq!(conv.begin_exchange("second").unwrap_err(), SubmitRejection::InFlight);
        assert_eq!(conv.len(), 1);

        conv.complete_exchange(pending, Ok(ChatReply::new("one")));
        let texts: Vec<&str> = conv.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "one"]);

        // Accepted again once the first exchange resolved.
        let pending = conv.begin_exchange("second").unwrap();
        conv.complete_exchange(pending, Ok(ChatReply::new("two")));
        assert_eq!(conv.len(), 4);
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let mut conv = Conversation::new();
        let pending = conv.begin_exchange("  padded question  ").unwrap();
        assert_eq!(pending.question(), "  padded question  ");
        assert_eq!(conv.messages()[0].text, "  padded question  ");
        conv.complete_exchange(pending, Ok(ChatReply::new("a")));
    }

    #[test]
    fn test_clear_resets_sequence() {
        let mut conv = Conversation::new();
        for i in 0..3 {
            let pending = conv.begin_exchange(&format!("q{i}")).unwrap();
            conv.complete_exchange(pending, Ok(ChatReply::new(format!("a{i}"))));
        }
        assert_eq!(conv.len(), 6);

        conv.clear();
        assert!(conv.is_empty());

        conv.clear();
        assert!(conv.is_empty());
    }

    #[test]
    fn test_clear_while_in_flight_keeps_pending_reply() {
        let mut conv = Conversation::new();
        let pending = conv.begin_exchange("q").unwrap();
        conv.clear();

        assert!(conv.is_empty());
        assert!(conv.is_in_flight());

        conv.complete_exchange(pending, Ok(ChatReply::new("late")));
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0].text, "late");
        assert!(!conv.is_in_flight());
    }

    #[test]
    fn test_messages_are_time_ordered() {
        let mut conv = Conversation::new();
        let pending = conv.begin_exchange("q").unwrap();
        conv.complete_exchange(pending, Ok(ChatReply::new("a")));
        assert!(conv.messages()[0].sent_at <= conv.messages()[1].sent_at);
    }
}
