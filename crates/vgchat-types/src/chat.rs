//! Chat message and `/chat` wire types.
//!
//! A conversation is an ordered list of [`ChatMessage`]s. Messages carry no
//! identity beyond their position in that list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    User,
    Assistant,
}

impl fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageOrigin::User => write!(f, "user"),
            MessageOrigin::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageOrigin::User),
            // The web widget labelled replies "bot".
            "assistant" | "bot" => Ok(MessageOrigin::Assistant),
            other => Err(format!("invalid message origin: '{other}'")),
        }
    }
}

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub origin: MessageOrigin,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// A user message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            origin: MessageOrigin::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    /// An assistant message stamped with the current time.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            origin: MessageOrigin::Assistant,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == MessageOrigin::User
    }
}

/// Request body for `POST {base}/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Response body from `POST {base}/chat`.
///
/// Only `answer` is required. The HRM backend also reports the SQL it ran
/// and the raw rows; both are optional and ignored by the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ChatReply {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            sql: None,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_display_roundtrip() {
        for origin in [MessageOrigin::User, MessageOrigin::Assistant] {
            let parsed: MessageOrigin = origin.to_string().parse().unwrap();
            assert_eq!(parsed, origin);
        }
    }

    #[test]
    fn test_origin_accepts_bot_alias() {
        assert_eq!("bot".parse::<MessageOrigin>(), Ok(MessageOrigin::Assistant));
        assert_eq!("USER".parse::<MessageOrigin>(), Ok(MessageOrigin::User));
        assert!("system".parse::<MessageOrigin>().is_err());
    }

    #[test]
    fn test_request_serializes_question_only() {
        let req = ChatRequest {
            question: "AI SOC là gì?".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "question": "AI SOC là gì?" }));
    }

    #[test]
    fn test_reply_minimal_body() {
        let reply: ChatReply = serde_json::from_str(r#"{"answer":"hello"}"#).unwrap();
        assert_eq!(reply, ChatReply::new("hello"));
    }

    #[test]
    fn test_reply_full_hrm_body() {
        let body = r#"{
            "sql": "SELECT ho_ten FROM nhanvien LIMIT 1",
            "data": [{"ho_ten": "Nguyen Van A"}],
            "answer": "Nguyen Van A",
            "extra": true
        }"#;
        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.answer, "Nguyen Van A");
        assert_eq!(reply.sql.as_deref(), Some("SELECT ho_ten FROM nhanvien LIMIT 1"));
        assert!(reply.data.unwrap().is_array());
    }

    #[test]
    fn test_reply_null_sql() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"sql": null, "data": null, "answer": "ok"}"#).unwrap();
        assert!(reply.sql.is_none());
        assert!(reply.data.is_none());
    }

    #[test]
    fn test_reply_missing_answer_is_error() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"detail":"boom"}"#).is_err());
    }

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("hi");
        assert!(user.is_user());
        assert_eq!(user.text, "hi");

        let bot = ChatMessage::assistant("hello");
        assert_eq!(bot.origin, MessageOrigin::Assistant);
        assert!(bot.sent_at >= user.sent_at);
    }
}
