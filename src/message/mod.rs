//! Message schema, validation and payload assembly.
//!
//! This module provides:
//! - Parameter records for the three operations ([`MessageContent`],
//!   [`EditMessageParams`], [`DeleteMessageParams`])
//! - Embed and mention sub-objects ([`Embed`], [`AllowedMentions`])
//! - Closed-shape parsing plus bound checks ([`parse_arguments`], [`Validate`])
//! - Wire payload construction ([`build_send_payload`], [`build_edit_payload`])
//!
//! Nothing here touches the network: every failure is a [`ValidationError`]
//! raised before a request is built.

mod embed;
mod error;
pub mod limits;
mod params;
mod payload;
mod validate;


pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia};
pub use error::{ValidationError, Violation, field};
pub use params::{
    AllowedMentions, DeleteMessageParams, EditMessageParams, MentionType, MessageContent,
};
pub use payload::{OutboundMessage, WebhookPayload, build_edit_payload, build_send_payload};
pub use validate::{Validate, embed_text_len, parse_arguments};
