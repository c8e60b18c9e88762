//! Infrastructure layer for the VietGuard Assistant chat client.
//!
//! Contains the implementation of the `ChatBackend` port defined in
//! `vgchat-core` (an HTTP client for the `/chat` endpoint) and the loader
//! for the optional `config.toml`.

pub mod config;
pub mod http;
