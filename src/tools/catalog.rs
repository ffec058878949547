//! Tool metadata advertised through `tools/list`.

use serde::Serialize;
use serde_json::{Value, json};

use crate::message::limits;

/// The three operations exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    SendMessage,
    EditMessage,
    DeleteMessage,
}

impl ToolName {
    /// All tools, in listing order.
    pub const ALL: [Self; 3] = [Self::SendMessage, Self::EditMessage, Self::DeleteMessage];

    /// Wire name of the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendMessage => "send_message",
            Self::EditMessage => "edit_message",
            Self::DeleteMessage => "delete_message",
        }
    }

    /// Looks up a tool by wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }
}

/// Tool definition for MCP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Returns the definitions of every tool.
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.into_iter().map(definition).collect()
}

fn definition(tool: ToolName) -> ToolDefinition {
    let (description, input_schema) = match tool {
        ToolName::SendMessage => (
            format!(
                "Send a message to the Discord channel bound to the webhook. Requires content \
                 or embeds. Limits: {} characters of content, {} embeds, {} characters across \
                 all embeds, about {} requests per minute per channel. Returns the message id \
                 needed to edit or delete it later.",
                limits::CONTENT_MAX,
                limits::EMBEDS_MAX,
                limits::EMBED_TOTAL_CHARS,
                limits::REQUESTS_PER_MINUTE,
            ),
            send_schema(),
        ),
        ToolName::EditMessage => (
            "Edit a message previously sent by this webhook. Only content, embeds and \
             allowed_mentions can change; the new message must still have content or embeds."
                .to_string(),
            edit_schema(),
        ),
        ToolName::DeleteMessage => (
            "Delete a message previously sent by this webhook. This cannot be undone.".to_string(),
            json!({
                "type": "object",
                "properties": { "message_id": message_id_schema() },
                "required": ["message_id"],
                "additionalProperties": false
            }),
        ),
    };

    ToolDefinition {
        name: tool.as_str(),
        description,
        input_schema,
    }
}

fn send_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "content": content_schema(),
            "embeds": embeds_schema(),
            "allowed_mentions": allowed_mentions_schema(),
            "username": {
                "type": "string",
                "maxLength": limits::USERNAME_MAX,
                "description": "Override the webhook's display name"
            },
            "avatar_url": {
                "type": "string",
                "format": "uri",
                "description": "Override the webhook's avatar"
            },
            "tts": {
                "type": "boolean",
                "default": false,
                "description": "Send as a text-to-speech message"
            },
            "thread_id": {
                "type": "string",
                "description": "Post into this existing thread"
            },
            "thread_name": {
                "type": "string",
                "maxLength": limits::THREAD_NAME_MAX,
                "description": "Create a thread with this name (forum and media channels only)"
            }
        },
        "additionalProperties": false
    })
}

fn edit_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "message_id": message_id_schema(),
            "content": content_schema(),
            "embeds": embeds_schema(),
            "allowed_mentions": allowed_mentions_schema()
        },
        "required": ["message_id"],
        "additionalProperties": false
    })
}

fn message_id_schema() -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": "Id returned by send_message"
    })
}

fn content_schema() -> Value {
    json!({
        "type": "string",
        "maxLength": limits::CONTENT_MAX,
        "description": "Message text (markdown supported)"
    })
}

fn url_schema() -> Value {
    json!({ "type": "string", "format": "uri" })
}

fn embeds_schema() -> Value {
    json!({
        "type": "array",
        "maxItems": limits::EMBEDS_MAX,
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string", "maxLength": limits::EMBED_TITLE_MAX },
                "description": { "type": "string", "maxLength": limits::EMBED_DESCRIPTION_MAX },
                "url": url_schema(),
                "timestamp": { "type": "string", "description": "ISO 8601 timestamp" },
                "color": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": limits::COLOR_MAX,
                    "description": "RGB color as an integer, e.g. 5814783 for 0x58B9FF"
                },
                "footer": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string", "maxLength": limits::FOOTER_TEXT_MAX },
                        "icon_url": url_schema()
                    },
                    "required": ["text"],
                    "additionalProperties": false
                },
                "image": media_schema(),
                "thumbnail": media_schema(),
                "author": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "maxLength": limits::AUTHOR_NAME_MAX },
                        "url": url_schema(),
                        "icon_url": url_schema()
                    },
                    "required": ["name"],
                    "additionalProperties": false
                },
                "fields": {
                    "type": "array",
                    "maxItems": limits::EMBED_FIELDS_MAX,
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "maxLength": limits::FIELD_NAME_MAX },
                            "value": { "type": "string", "maxLength": limits::FIELD_VALUE_MAX },
                            "inline": { "type": "boolean" }
                        },
                        "required": ["name", "value"],
                        "additionalProperties": false
                    }
                }
            },
            "additionalProperties": false
        }
    })
}

fn media_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "url": url_schema() },
        "required": ["url"],
        "additionalProperties": false
    })
}

fn allowed_mentions_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "parse": {
                "type": "array",
                "items": { "type": "string", "enum": ["roles", "users", "everyone"] }
            },
            "roles": { "type": "array", "items": { "type": "string" } },
            "users": { "type": "array", "items": { "type": "string" } },
            "replied_user": { "type": "boolean", "default": false }
        },
        "additionalProperties": false
    })
}
