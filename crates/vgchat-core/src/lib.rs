//! Conversation logic for the VietGuard Assistant chat client.
//!
//! This crate defines the `ChatBackend` port that the infrastructure layer
//! implements, and the conversation state machine driven by the CLI. It
//! depends only on `vgchat-types` -- never on `vgchat-infra` or any HTTP
//! crate.

pub mod chat;
