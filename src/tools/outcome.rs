//! Structured tool results.

use serde::Serialize;
use serde_json::{Value, json};

use crate::webhook::WebhookMessage;

use super::ToolError;

/// Success payload of a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageSuccess {
    /// Always `true`; mirrors the failure payload's `success: false`
    pub success: bool,
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl MessageSuccess {
    /// Success for an operation that only knows the message id.
    #[must_use]
    pub fn id_only(message_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id: message_id.into(),
            channel_id: None,
            timestamp: None,
        }
    }
}

impl From<WebhookMessage> for MessageSuccess {
    fn from(message: WebhookMessage) -> Self {
        Self {
            success: true,
            message_id: message.id,
            channel_id: message.channel_id,
            timestamp: message.timestamp,
        }
    }
}

/// Result of one tool call: the structured payload and a text summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    result: Result<MessageSuccess, ToolError>,
    summary: String,
}

impl ToolOutcome {
    /// A successful call with a summary line.
    #[must_use]
    pub fn success(payload: MessageSuccess, summary: impl Into<String>) -> Self {
        Self {
            result: Ok(payload),
            summary: summary.into(),
        }
    }

    /// A failed call; the summary is the error's rendering.
    #[must_use]
    pub fn failure(error: ToolError) -> Self {
        let summary = error.to_string();
        Self {
            result: Err(error),
            summary,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.result.is_err()
    }

    #[must_use]
    pub const fn result(&self) -> &Result<MessageSuccess, ToolError> {
        &self.result
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the success or failure payload as JSON.
    ///
    /// Failures render as `{"success": false, "error": {"type": ..., ...}}`.
    #[must_use]
    pub fn structured(&self) -> Value {
        match &self.result {
            Ok(success) => json!(success),
            Err(error) => json!({ "success": false, "error": error }),
        }
    }

    /// Renders the MCP `tools/call` result object.
    #[must_use]
    pub fn to_call_result(&self) -> Value {
        json!({
            "content": [{ "type": "text", "text": self.summary }],
            "structuredContent": self.structured(),
            "isError": self.is_error(),
        })
    }
}

impl From<ToolError> for ToolOutcome {
    fn from(error: ToolError) -> Self {
        Self::failure(error)
    }
}
