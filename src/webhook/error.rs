//! Error types for HTTP and webhook operations.

use thiserror::Error;

/// Error type for HTTP transport failures.
///
/// Covers everything that prevents a response from arriving. A response
/// with a non-2xx status is not an `HttpError`.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed (DNS, refused, reset, TLS).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the client's timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

const UNKNOWN_STATUS: &str = "Unknown Status";

/// Reason phrase for `status`, or `Unknown Status` for codes without one (e.g. 520).
#[must_use]
pub fn status_text(status: http::StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or(UNKNOWN_STATUS)
}

/// Error type for Discord webhook operations.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Discord answered with a non-2xx status.
    ///
    /// The body is kept verbatim; for 429 it carries `retry_after`.
    #[error(
        "Discord Webhook error: {} {}\n{body}",
        .status.as_u16(),
        .status.canonical_reason().unwrap_or(UNKNOWN_STATUS)
    )]
    Status {
        /// Response status
        status: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// No response was received.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A 2xx response carried a body that is not a message object.
    #[error("Failed to decode webhook response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The message URL could not be derived from the webhook URL.
    #[error("Cannot address messages under webhook URL: {0}")]
    InvalidUrl(String),
}
