//! Shared domain types for the VietGuard Assistant chat client.
//!
//! This crate contains the types used across the workspace: chat messages,
//! the `/chat` wire format, client configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
