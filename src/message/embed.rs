//! Embed objects.
//!
//! Every struct rejects unknown keys and serializes only the fields that
//! were supplied, so an embed goes out on the wire exactly as received.

use serde::{Deserialize, Serialize};

/// A rich-content block attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Embed {
    /// Title (at most 256 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description (at most 4096 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link target of the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Timestamp shown in the footer, passed through as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Sidebar color as a 24-bit RGB integer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    /// Name/value pairs (at most 25)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<EmbedField>>,
}

/// Footer of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedFooter {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Image or thumbnail of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedMedia {
    pub url: String,
}

/// Author line of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedAuthor {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A single name/value field of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedField {
    pub name: String,
    pub value: String,

    /// Render side by side with neighbouring inline fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl Embed {
    /// Iterates over the embed's user-visible text, for the aggregate budget.
    pub(crate) fn text_parts(&self) -> impl Iterator<Item = &str> {
        let fields = self
            .fields
            .iter()
            .flatten()
            .flat_map(|f| [f.name.as_str(), f.value.as_str()]);

        [
            self.title.as_deref(),
            self.description.as_deref(),
            self.footer.as_ref().map(|f| f.text.as_str()),
            self.author.as_ref().map(|a| a.name.as_str()),
        ]
        .into_iter()
        .flatten()
        .chain(fields)
    }
}
