//! Span and field names for exchange instrumentation.
//!
//! Field names follow the OpenTelemetry HTTP client conventions where one
//! exists, so exported spans line up with other HTTP telemetry.

/// Span wrapping one question/answer exchange.
pub const SPAN_EXCHANGE: &str = "chat.exchange";

/// Number of the exchange within the session (1-based).
pub const EXCHANGE_NUMBER: &str = "chat.exchange.number";

/// Whether the exchange ended with the fallback message.
pub const EXCHANGE_FALLBACK: &str = "chat.exchange.fallback";

/// Full URL questions are posted to.
pub const URL_FULL: &str = "url.full";

/// HTTP method of the outbound request.
pub const HTTP_REQUEST_METHOD: &str = "http.request.method";

/// Tracer name registered with OpenTelemetry.
pub const TRACER_NAME: &str = "vgchat";
