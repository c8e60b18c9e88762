//! Observability for the VietGuard Assistant chat client.
//!
//! `tracing_setup` installs the global subscriber; `fields` holds the span
//! and field names used when instrumenting exchanges.

pub mod fields;
pub mod tracing_setup;
