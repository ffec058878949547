//! Tests for tool outcomes and error rendering.

use serde_json::json;

use super::{MessageSuccess, ToolError, ToolOutcome};
use crate::message::ValidationError;
use crate::webhook::{HttpError, WebhookError};

mod tool_error {
    use super::*;

    #[test]
    fn validation_error_renders_field_and_message() {
        let error = ToolError::from(ValidationError::missing_content());

        assert_eq!(
            error.to_string(),
            "Validation error on content/embeds: Either content or embeds must be provided"
        );
        assert_eq!(
            json!(error),
            json!({
                "type": "validation_error",
                "field": "content/embeds",
                "message": "Either content or embeds must be provided"
            })
        );
    }

    #[test]
    fn status_error_becomes_webhook_error() {
        let error = ToolError::from(WebhookError::Status {
            status: http::StatusCode::NOT_FOUND,
            body: "Unknown Message".to_string(),
        });

        assert_eq!(error.kind(), "webhook_error");
        assert_eq!(
            error.to_string(),
            "Discord Webhook error: 404 Not Found\nUnknown Message"
        );
    }

    #[test]
    fn status_without_canonical_reason_renders_unknown_status() {
        let error = ToolError::from(WebhookError::Status {
            status: http::StatusCode::from_u16(520).unwrap(),
            body: "origin error".to_string(),
        });

        assert_eq!(json!(error)["statusText"], "Unknown Status");
        assert_eq!(
            error.to_string(),
            "Discord Webhook error: 520 Unknown Status\norigin error"
        );
    }

    #[test]
    fn transport_error_becomes_unknown_error() {
        let error = ToolError::from(WebhookError::Http(HttpError::Timeout));

        assert_eq!(error, ToolError::unknown("Request timed out"));
        assert_eq!(error.to_string(), "Unknown error: Request timed out");
        assert_eq!(
            json!(error),
            json!({ "type": "unknown_error", "message": "Request timed out" })
        );
    }
}

mod tool_outcome {
    use super::*;

    #[test]
    fn success_call_result_is_not_error() {
        let outcome = ToolOutcome::success(MessageSuccess::id_only("7"), "done");

        assert_eq!(
            outcome.to_call_result(),
            json!({
                "content": [{ "type": "text", "text": "done" }],
                "structuredContent": { "success": true, "message_id": "7" },
                "isError": false
            })
        );
    }

    #[test]
    fn failure_call_result_sets_is_error() {
        let outcome = ToolOutcome::failure(ToolError::unknown("boom"));
        let result = outcome.to_call_result();

        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Unknown error: boom");
        assert_eq!(result["structuredContent"]["success"], false);
        assert_eq!(result["structuredContent"]["error"]["type"], "unknown_error");
    }
}
