//! Bound and format checks over parsed parameters.

use serde::de::DeserializeOwned;
use url::Url;

use super::embed::{Embed, EmbedField};
use super::error::{ValidationError, Violation};
use super::limits;
use super::params::{AllowedMentions, DeleteMessageParams, EditMessageParams, MessageContent};

/// A parameter record that can check its own constraints.
///
/// Shape errors (unknown keys, wrong types) are caught by serde during
/// [`parse_arguments`]; this trait covers lengths, counts and formats.
pub trait Validate {
    /// Appends every violation found to `out`.
    fn collect_violations(&self, out: &mut Vec<Violation>);

    /// Checks all constraints at once.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] aggregating every violation.
    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        self.collect_violations(&mut violations);
        ValidationError::from_violations(violations).map_or(Ok(()), Err)
    }
}

/// Decodes a raw argument object and validates it.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the object has the wrong shape or
/// violates any bound.
pub fn parse_arguments<T>(arguments: serde_json::Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
{
    let params: T =
        serde_path_to_error::deserialize(arguments).map_err(ValidationError::from_decode)?;
    params.validate()?;
    Ok(params)
}

/// Total visible characters across a list of embeds.
#[must_use]
pub fn embed_text_len(embeds: &[Embed]) -> usize {
    embeds
        .iter()
        .flat_map(Embed::text_parts)
        .map(|s| s.chars().count())
        .sum()
}

impl Validate for MessageContent {
    fn collect_violations(&self, out: &mut Vec<Violation>) {
        check_optional_len(out, "content", self.content.as_deref(), limits::CONTENT_MAX);
        check_optional_len(out, "username", self.username.as_deref(), limits::USERNAME_MAX);
        check_optional_url(out, "avatar_url", self.avatar_url.as_deref());
        check_optional_len(
            out,
            "thread_name",
            self.thread_name.as_deref(),
            limits::THREAD_NAME_MAX,
        );
        if let Some(embeds) = &self.embeds {
            check_embeds(out, embeds);
        }
        if let Some(mentions) = &self.allowed_mentions {
            check_mentions(out, mentions);
        }
    }
}

impl Validate for EditMessageParams {
    fn collect_violations(&self, out: &mut Vec<Violation>) {
        check_message_id(out, &self.message_id);
        check_optional_len(out, "content", self.content.as_deref(), limits::CONTENT_MAX);
        if let Some(embeds) = &self.embeds {
            check_embeds(out, embeds);
        }
        if let Some(mentions) = &self.allowed_mentions {
            check_mentions(out, mentions);
        }
    }
}

impl Validate for DeleteMessageParams {
    fn collect_violations(&self, out: &mut Vec<Violation>) {
        check_message_id(out, &self.message_id);
    }
}

fn check_message_id(out: &mut Vec<Violation>, id: &str) {
    if id.trim().is_empty() {
        out.push(Violation::new("message_id", "must not be empty"));
    } else if matches!(id, "." | "..") {
        out.push(Violation::new("message_id", "must not be a relative path segment"));
    }
}

fn check_len(out: &mut Vec<Violation>, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        out.push(Violation::new(
            field,
            format!("must be at most {max} characters (got {len})"),
        ));
    }
}

fn check_optional_len(out: &mut Vec<Violation>, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        check_len(out, field, value, max);
    }
}

fn check_url(out: &mut Vec<Violation>, field: &str, value: &str) {
    if let Err(e) = Url::parse(value) {
        out.push(Violation::new(field, format!("must be a valid URL ({e})")));
    }
}

fn check_optional_url(out: &mut Vec<Violation>, field: &str, value: Option<&str>) {
    if let Some(value) = value {
        check_url(out, field, value);
    }
}

fn check_embeds(out: &mut Vec<Violation>, embeds: &[Embed]) {
    if embeds.len() > limits::EMBEDS_MAX {
        out.push(Violation::new(
            "embeds",
            format!(
                "must contain at most {} embeds (got {})",
                limits::EMBEDS_MAX,
                embeds.len()
            ),
        ));
    }

    for (i, embed) in embeds.iter().enumerate() {
        check_embed(out, &format!("embeds[{i}]"), embed);
    }
}

fn check_embed(out: &mut Vec<Violation>, path: &str, embed: &Embed) {
    check_optional_len(
        out,
        &format!("{path}.title"),
        embed.title.as_deref(),
        limits::EMBED_TITLE_MAX,
    );
    check_optional_len(
        out,
        &format!("{path}.description"),
        embed.description.as_deref(),
        limits::EMBED_DESCRIPTION_MAX,
    );
    check_optional_url(out, &format!("{path}.url"), embed.url.as_deref());

    if let Some(color) = embed.color {
        if !(0..=limits::COLOR_MAX).contains(&color) {
            out.push(Violation::new(
                format!("{path}.color"),
                format!("must be between 0 and {} (got {color})", limits::COLOR_MAX),
            ));
        }
    }

    if let Some(footer) = &embed.footer {
        check_len(
            out,
            &format!("{path}.footer.text"),
            &footer.text,
            limits::FOOTER_TEXT_MAX,
        );
        check_optional_url(
            out,
            &format!("{path}.footer.icon_url"),
            footer.icon_url.as_deref(),
        );
    }

    if let Some(image) = &embed.image {
        check_url(out, &format!("{path}.image.url"), &image.url);
    }
    if let Some(thumbnail) = &embed.thumbnail {
        check_url(out, &format!("{path}.thumbnail.url"), &thumbnail.url);
    }

    if let Some(author) = &embed.author {
        check_len(
            out,
            &format!("{path}.author.name"),
            &author.name,
            limits::AUTHOR_NAME_MAX,
        );
        check_optional_url(out, &format!("{path}.author.url"), author.url.as_deref());
        check_optional_url(
            out,
            &format!("{path}.author.icon_url"),
            author.icon_url.as_deref(),
        );
    }

    if let Some(fields) = &embed.fields {
        check_fields(out, path, fields);
    }
}

fn check_fields(out: &mut Vec<Violation>, path: &str, fields: &[EmbedField]) {
    if fields.len() > limits::EMBED_FIELDS_MAX {
        out.push(Violation::new(
            format!("{path}.fields"),
            format!(
                "must contain at most {} fields (got {})",
                limits::EMBED_FIELDS_MAX,
                fields.len()
            ),
        ));
    }

    for (i, field) in fields.iter().enumerate() {
        check_len(
            out,
            &format!("{path}.fields[{i}].name"),
            &field.name,
            limits::FIELD_NAME_MAX,
        );
        check_len(
            out,
            &format!("{path}.fields[{i}].value"),
            &field.value,
            limits::FIELD_VALUE_MAX,
        );
    }
}

// `parse` values are restricted by the `MentionType` enum at decode time.
fn check_mentions(out: &mut Vec<Violation>, mentions: &AllowedMentions) {
    let ids = [("roles", &mentions.roles), ("users", &mentions.users)];
    for (name, list) in ids {
        let Some(list) = list else { continue };
        for (i, id) in list.iter().enumerate() {
            if id.trim().is_empty() {
                out.push(Violation::new(
                    format!("allowed_mentions.{name}[{i}]"),
                    "must not be empty",
                ));
            }
        }
    }
}
