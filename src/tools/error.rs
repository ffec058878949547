//! Error taxonomy returned across the tool boundary.

use serde::Serialize;
use thiserror::Error;

use crate::message::ValidationError;
use crate::webhook::{WebhookError, status_text};

/// Why a tool call failed.
///
/// Closed set. Serialized with a `type` tag so callers can branch on it;
/// `Display` is the human-readable rendering of each kind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type")]
pub enum ToolError {
    /// Input rejected locally; no request was sent.
    #[error("Validation error on {field}: {message}")]
    #[serde(rename = "validation_error")]
    Validation {
        /// Offending field path(s)
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Discord answered with a non-2xx status.
    #[error("Discord Webhook error: {status} {status_text}\n{body}")]
    #[serde(rename = "webhook_error")]
    Webhook {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        #[serde(rename = "statusText")]
        status_text: String,
        /// Raw response body, unparsed
        body: String,
    },

    /// Anything else: network failure, malformed response.
    #[error("Unknown error: {message}")]
    #[serde(rename = "unknown_error")]
    Unknown {
        /// Description of the failure
        message: String,
    },
}

impl ToolError {
    /// Creates an `Unknown` error from any message.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Returns the serialized `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Webhook { .. } => "webhook_error",
            Self::Unknown { .. } => "unknown_error",
        }
    }
}

impl From<ValidationError> for ToolError {
    fn from(error: ValidationError) -> Self {
        Self::Validation {
            field: error.field,
            message: error.message,
        }
    }
}

impl From<WebhookError> for ToolError {
    fn from(error: WebhookError) -> Self {
        match error {
            WebhookError::Status { status, body } => Self::Webhook {
                status: status.as_u16(),
                status_text: status_text(status).to_string(),
                body,
            },
            other => Self::unknown(other.to_string()),
        }
    }
}
