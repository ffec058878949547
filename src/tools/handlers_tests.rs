//! Tests for the tool handlers, end to end against a mock webhook.

use std::sync::Arc;

use serde_json::json;

use super::{ToolError, WebhookTools};
use crate::webhook::DiscordWebhook;
use crate::webhook::test_fixtures::{MockClient, webhook_url};

fn tools(client: &Arc<MockClient>) -> WebhookTools<Arc<MockClient>> {
    WebhookTools::new(DiscordWebhook::new(Arc::clone(client), webhook_url()))
}

mod send_message {
    use super::*;

    #[tokio::test]
    async fn success_echoes_ids_from_response() {
        let client = Arc::new(MockClient::message(
            "1100",
            "2200",
            "2024-05-01T12:00:00.000000+00:00",
        ));

        let outcome = tools(&client)
            .send_message(json!({ "content": "hello" }))
            .await;

        assert!(!outcome.is_error());
        assert_eq!(
            outcome.structured(),
            json!({
                "success": true,
                "message_id": "1100",
                "channel_id": "2200",
                "timestamp": "2024-05-01T12:00:00.000000+00:00"
            })
        );
        assert!(outcome.summary().contains("1100"));
    }

    #[tokio::test]
    async fn missing_content_and_embeds_never_reaches_network() {
        let client = Arc::new(MockClient::untouched());

        let outcome = tools(&client).send_message(json!({ "username": "bot" })).await;

        assert_eq!(
            outcome.result().as_ref().unwrap_err(),
            &ToolError::Validation {
                field: "content/embeds".to_string(),
                message: "Either content or embeds must be provided".to_string(),
            }
        );
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn too_many_embeds_never_reaches_network() {
        let client = Arc::new(MockClient::untouched());
        let embeds: Vec<_> = (0..11).map(|_| json!({ "title": "t" })).collect();

        let outcome = tools(&client).send_message(json!({ "embeds": embeds })).await;

        assert!(matches!(
            outcome.result(),
            Err(ToolError::Validation { field, .. }) if field == "embeds"
        ));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn out_of_range_color_never_reaches_network() {
        let client = Arc::new(MockClient::untouched());

        let outcome = tools(&client)
            .send_message(json!({ "embeds": [{ "color": 16_777_216 }] }))
            .await;

        assert!(outcome.is_error());
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn thread_routing_is_sent_as_query() {
        let client = Arc::new(MockClient::message("1", "99", "t"));

        tools(&client)
            .send_message(json!({ "content": "hi", "thread_id": "99" }))
            .await;

        let request = &client.captured_requests()[0];
        assert_eq!(request.url.query(), Some("wait=true&thread_id=99"));
        assert_eq!(client.json_body(0), json!({ "content": "hi" }));
    }

    #[tokio::test]
    async fn rate_limit_body_is_passed_through() {
        let body = r#"{"message":"You are being rate limited.","retry_after":2.5,"global":false}"#;
        let client = Arc::new(MockClient::respond(429, body));

        let outcome = tools(&client).send_message(json!({ "content": "hi" })).await;

        assert_eq!(
            outcome.structured(),
            json!({
                "success": false,
                "error": {
                    "type": "webhook_error",
                    "status": 429,
                    "statusText": "Too Many Requests",
                    "body": body
                }
            })
        );
    }

    #[tokio::test]
    async fn network_failure_is_unknown_error() {
        let client = Arc::new(MockClient::unreachable());

        let outcome = tools(&client).send_message(json!({ "content": "hi" })).await;

        assert!(matches!(outcome.result(), Err(ToolError::Unknown { .. })));
        assert!(outcome.summary().starts_with("Unknown error: Connection error"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_unknown_error() {
        let client = Arc::new(MockClient::respond(200, "<html>"));

        let outcome = tools(&client).send_message(json!({ "content": "hi" })).await;

        assert!(matches!(outcome.result(), Err(ToolError::Unknown { .. })));
    }
}

mod edit_message {
    use super::*;

    #[tokio::test]
    async fn success_returns_edited_message() {
        let client = Arc::new(MockClient::message("1100", "2200", "t"));

        let outcome = tools(&client)
            .edit_message(json!({ "message_id": "1100", "content": "changed" }))
            .await;

        assert!(!outcome.is_error());
        assert_eq!(outcome.structured()["message_id"], "1100");
        assert_eq!(client.captured_requests()[0].method, http::Method::PATCH);
        assert_eq!(client.json_body(0), json!({ "content": "changed" }));
    }

    #[tokio::test]
    async fn requires_content_or_embeds() {
        let client = Arc::new(MockClient::untouched());

        let outcome = tools(&client)
            .edit_message(json!({ "message_id": "1100" }))
            .await;

        assert!(matches!(
            outcome.result(),
            Err(ToolError::Validation { field, .. }) if field == "content/embeds"
        ));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_message_is_webhook_error() {
        let client = Arc::new(MockClient::respond(404, "Unknown Message"));

        let outcome = tools(&client)
            .edit_message(json!({ "message_id": "1", "content": "x" }))
            .await;

        assert_eq!(
            outcome.summary(),
            "Discord Webhook error: 404 Not Found\nUnknown Message"
        );
    }
}

mod delete_message {
    use super::*;

    #[tokio::test]
    async fn empty_body_is_success() {
        let client = Arc::new(MockClient::respond(204, ""));

        let outcome = tools(&client)
            .delete_message(json!({ "message_id": "1100" }))
            .await;

        assert_eq!(
            outcome.structured(),
            json!({ "success": true, "message_id": "1100" })
        );
        assert_eq!(outcome.summary(), "Message 1100 deleted successfully.");
    }

    #[tokio::test]
    async fn not_found_keeps_status_and_body() {
        let client = Arc::new(MockClient::respond(404, "Unknown Message"));

        let outcome = tools(&client)
            .delete_message(json!({ "message_id": "1100" }))
            .await;

        assert_eq!(
            outcome.result().as_ref().unwrap_err(),
            &ToolError::Webhook {
                status: 404,
                status_text: "Not Found".to_string(),
                body: "Unknown Message".to_string(),
            }
        );
        assert_eq!(
            outcome.summary(),
            "Discord Webhook error: 404 Not Found\nUnknown Message"
        );
    }

    #[tokio::test]
    async fn missing_message_id_is_validation_error() {
        let client = Arc::new(MockClient::untouched());

        let outcome = tools(&client).delete_message(json!({})).await;

        assert!(matches!(
            outcome.result(),
            Err(ToolError::Validation { field, .. }) if field == "message_id"
        ));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn dot_dot_message_id_never_reaches_network() {
        let client = Arc::new(MockClient::untouched());

        let outcome = tools(&client)
            .delete_message(json!({ "message_id": ".." }))
            .await;

        assert!(matches!(
            outcome.result(),
            Err(ToolError::Validation { field, .. }) if field == "message_id"
        ));
        assert_eq!(client.calls(), 0);
    }
}

mod dispatch {
    use super::*;

    #[tokio::test]
    async fn unknown_tool_returns_none() {
        let client = Arc::new(MockClient::untouched());

        assert!(tools(&client).call("purge_channel", json!({})).await.is_none());
    }

    #[tokio::test]
    async fn known_tool_is_dispatched() {
        let client = Arc::new(MockClient::respond(204, ""));

        let outcome = tools(&client)
            .call("delete_message", json!({ "message_id": "5" }))
            .await
            .unwrap();

        assert!(!outcome.is_error());
        assert_eq!(client.calls(), 1);
    }
}
