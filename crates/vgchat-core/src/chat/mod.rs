//! Conversation state, the backend port, and the service tying them together.
//!
//! `Conversation` owns the ordered message list and the in-flight flag;
//! `ChatService` drives one exchange at a time against a `ChatBackend`.

pub mod backend;
pub mod conversation;
pub mod service;
pub mod suggestions;
