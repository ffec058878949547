//! Tool handlers: validate, build, send, classify.

use serde_json::Value;

use crate::message::{
    DeleteMessageParams, EditMessageParams, Embed, MessageContent, build_edit_payload,
    build_send_payload, embed_text_len, limits, parse_arguments,
};
use crate::webhook::{DiscordWebhook, HttpClient};

use super::{MessageSuccess, ToolError, ToolName, ToolOutcome};

/// Runs the message tools against one webhook.
///
/// Stateless apart from the webhook itself; each call issues at most one
/// HTTP request and always returns a [`ToolOutcome`].
#[derive(Debug)]
pub struct WebhookTools<H> {
    webhook: DiscordWebhook<H>,
}

impl<H: HttpClient> WebhookTools<H> {
    #[must_use]
    pub const fn new(webhook: DiscordWebhook<H>) -> Self {
        Self { webhook }
    }

    /// Dispatches a call by tool name.
    ///
    /// Returns `None` for an unknown tool name.
    pub async fn call(&self, name: &str, arguments: Value) -> Option<ToolOutcome> {
        let tool = ToolName::from_name(name)?;
        tracing::info!(tool = tool.as_str(), "Tool call");

        let outcome = match tool {
            ToolName::SendMessage => self.send_message(arguments).await,
            ToolName::EditMessage => self.edit_message(arguments).await,
            ToolName::DeleteMessage => self.delete_message(arguments).await,
        };

        if let Err(error) = outcome.result() {
            tracing::warn!(tool = tool.as_str(), kind = error.kind(), "Tool call failed: {error}");
        }
        Some(outcome)
    }

    /// Sends a new message.
    pub async fn send_message(&self, arguments: Value) -> ToolOutcome {
        self.try_send(arguments).await.unwrap_or_else(ToolOutcome::from)
    }

    /// Edits a message sent by this webhook.
    pub async fn edit_message(&self, arguments: Value) -> ToolOutcome {
        self.try_edit(arguments).await.unwrap_or_else(ToolOutcome::from)
    }

    /// Deletes a message sent by this webhook.
    pub async fn delete_message(&self, arguments: Value) -> ToolOutcome {
        self.try_delete(arguments).await.unwrap_or_else(ToolOutcome::from)
    }

    async fn try_send(&self, arguments: Value) -> Result<ToolOutcome, ToolError> {
        let params: MessageContent = parse_arguments(arguments)?;
        let outbound = build_send_payload(&params)?;
        warn_on_embed_budget(params.embeds.as_deref());

        let message = self.webhook.execute(&outbound).await?;
        let summary = format!("Message sent successfully. Message ID: {}", message.id);
        Ok(ToolOutcome::success(message.into(), summary))
    }

    async fn try_edit(&self, arguments: Value) -> Result<ToolOutcome, ToolError> {
        let params: EditMessageParams = parse_arguments(arguments)?;
        let (message_id, content) = params.into_parts();
        let payload = build_edit_payload(&content)?;
        warn_on_embed_budget(content.embeds.as_deref());

        let message = self.webhook.edit_message(&message_id, &payload).await?;
        let summary = format!("Message {} edited successfully.", message.id);
        Ok(ToolOutcome::success(message.into(), summary))
    }

    async fn try_delete(&self, arguments: Value) -> Result<ToolOutcome, ToolError> {
        let params: DeleteMessageParams = parse_arguments(arguments)?;

        self.webhook.delete_message(&params.message_id).await?;
        let summary = format!("Message {} deleted successfully.", params.message_id);
        Ok(ToolOutcome::success(
            MessageSuccess::id_only(params.message_id),
            summary,
        ))
    }
}

// Discord rejects the message itself when the budget is exceeded.
fn warn_on_embed_budget(embeds: Option<&[Embed]>) {
    let Some(embeds) = embeds else { return };
    let total = embed_text_len(embeds);
    if total > limits::EMBED_TOTAL_CHARS {
        tracing::warn!(
            total,
            limit = limits::EMBED_TOTAL_CHARS,
            "Embeds exceed Discord's aggregate character budget"
        );
    }
}
