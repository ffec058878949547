//! Parameter records for the send, edit and delete operations.

use serde::{Deserialize, Serialize};

use super::embed::Embed;

/// Content of a message to create.
///
/// Doubles as the parameter record of the send operation. Edits reuse
/// the same shape but only forward the editable subset (see
/// [`build_edit_payload`](super::build_edit_payload)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageContent {
    /// Message text (at most 2000 characters)
    #[serde(default)]
    pub content: Option<String>,

    /// Rich embeds (at most 10)
    #[serde(default)]
    pub embeds: Option<Vec<Embed>>,

    /// Which mentions are allowed to ping
    #[serde(default)]
    pub allowed_mentions: Option<AllowedMentions>,

    /// Display-name override (at most 80 characters)
    #[serde(default)]
    pub username: Option<String>,

    /// Avatar override URL
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Deliver as text-to-speech
    #[serde(default)]
    pub tts: bool,

    /// Existing thread to post into (sent as a query parameter)
    #[serde(default)]
    pub thread_id: Option<String>,

    /// Name of a thread to create in a forum or media channel
    #[serde(default)]
    pub thread_name: Option<String>,
}

impl MessageContent {
    /// Returns true if there is non-empty text or at least one embed.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
            || self.embeds.as_ref().is_some_and(|e| !e.is_empty())
    }
}

/// Parameters of the edit operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditMessageParams {
    /// Identifier returned when the message was sent
    pub message_id: String,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub embeds: Option<Vec<Embed>>,

    #[serde(default)]
    pub allowed_mentions: Option<AllowedMentions>,
}

impl EditMessageParams {
    /// Splits into the message identifier and the new content.
    #[must_use]
    pub fn into_parts(self) -> (String, MessageContent) {
        let content = MessageContent {
            content: self.content,
            embeds: self.embeds,
            allowed_mentions: self.allowed_mentions,
            ..MessageContent::default()
        };
        (self.message_id, content)
    }
}

/// Parameters of the delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteMessageParams {
    /// Identifier returned when the message was sent
    pub message_id: String,
}

/// Controls which mentions in the message actually notify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllowedMentions {
    /// Mention types parsed from the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse: Option<Vec<MentionType>>,

    /// Role ids allowed to be mentioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// User ids allowed to be mentioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,

    /// Whether to mention the author of a replied-to message
    #[serde(default)]
    pub replied_user: bool,
}

/// Mention categories accepted in [`AllowedMentions::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    Roles,
    Users,
    Everyone,
}
