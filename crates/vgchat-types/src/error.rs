use thiserror::Error;

/// Why an exchange with the `/chat` backend failed.
///
/// The conversation surfaces every variant the same way (the fallback
/// message); the distinction exists for logging.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid backend base url '{0}'")]
    InvalidBaseUrl(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed reply: {0}")]
    Decode(String),
}

/// Why `submit` refused to start an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("message is empty")]
    EmptyText,

    #[error("a reply is still pending")]
    InFlight,
}

/// Errors from loading client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no backend base url configured (set VGCHAT_API_BASE or pass --api-base)")]
    MissingApiBase,

    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned status 502: bad gateway");
    }

    #[test]
    fn test_submit_rejection_display() {
        assert_eq!(SubmitRejection::EmptyText.to_string(), "message is empty");
        assert_eq!(SubmitRejection::InFlight.to_string(), "a reply is still pending");
    }

    #[test]
    fn test_config_error_mentions_env_var() {
        assert!(ConfigError::MissingApiBase.to_string().contains("VGCHAT_API_BASE"));
    }
}
