//! Wire payload assembly.
//!
//! Discord treats the presence of a key as "set this field", so absent or
//! empty values are left out of the body entirely instead of being sent
//! as `null` or `""`.

use serde::Serialize;

use super::embed::Embed;
use super::error::ValidationError;
use super::params::{AllowedMentions, MessageContent};

/// JSON body of an execute or edit request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
}

/// A message ready to send: the body plus out-of-band routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// JSON body
    pub payload: WebhookPayload,
    /// Target thread, carried as the `thread_id` query parameter
    pub thread_id: Option<String>,
}

/// Builds the execute request for a new message.
///
/// `thread_name` is only forwarded when no `thread_id` is given, since
/// posting into an existing thread cannot also create one.
///
/// # Errors
///
/// Returns a [`ValidationError`] on field `content/embeds` when the
/// message has neither text nor embeds.
pub fn build_send_payload(message: &MessageContent) -> Result<OutboundMessage, ValidationError> {
    if !message.has_body() {
        return Err(ValidationError::missing_content());
    }

    let thread_id = non_empty(message.thread_id.as_ref());
    let thread_name = if thread_id.is_none() {
        non_empty(message.thread_name.as_ref())
    } else {
        None
    };

    let payload = WebhookPayload {
        username: non_empty(message.username.as_ref()),
        avatar_url: non_empty(message.avatar_url.as_ref()),
        tts: message.tts.then_some(true),
        thread_name,
        ..editable_fields(message)
    };

    Ok(OutboundMessage { payload, thread_id })
}

/// Builds the edit request body.
///
/// Only text, embeds and allowed mentions can change after a message is
/// sent; every other field of `message` is dropped.
///
/// # Errors
///
/// Returns a [`ValidationError`] on field `content/embeds` when the
/// message has neither text nor embeds.
pub fn build_edit_payload(message: &MessageContent) -> Result<WebhookPayload, ValidationError> {
    if !message.has_body() {
        return Err(ValidationError::missing_content());
    }

    Ok(editable_fields(message))
}

fn editable_fields(message: &MessageContent) -> WebhookPayload {
    WebhookPayload {
        content: non_empty(message.content.as_ref()),
        embeds: message.embeds.clone().filter(|e| !e.is_empty()),
        allowed_mentions: message.allowed_mentions.clone(),
        ..WebhookPayload::default()
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}
