//! Discord message limits.
//!
//! Lengths are counted in Unicode scalar values.

/// Maximum length of the message text.
pub const CONTENT_MAX: usize = 2000;

/// Maximum length of the display-name override.
pub const USERNAME_MAX: usize = 80;

/// Maximum length of a thread name when creating a forum post.
pub const THREAD_NAME_MAX: usize = 100;

/// Maximum number of embeds per message.
pub const EMBEDS_MAX: usize = 10;

/// Maximum length of an embed title.
pub const EMBED_TITLE_MAX: usize = 256;

/// Maximum length of an embed description.
pub const EMBED_DESCRIPTION_MAX: usize = 4096;

/// Maximum number of fields per embed.
pub const EMBED_FIELDS_MAX: usize = 25;

/// Maximum length of an embed field name.
pub const FIELD_NAME_MAX: usize = 256;

/// Maximum length of an embed field value.
pub const FIELD_VALUE_MAX: usize = 1024;

/// Maximum length of an embed footer text.
pub const FOOTER_TEXT_MAX: usize = 2048;

/// Maximum length of an embed author name.
pub const AUTHOR_NAME_MAX: usize = 256;

/// Largest embed color (24-bit RGB).
pub const COLOR_MAX: i64 = 0xFF_FFFF;

/// Aggregate character budget across all embeds of one message.
///
/// Documented only; Discord enforces it server-side.
pub const EMBED_TOTAL_CHARS: usize = 6000;

/// Documented webhook rate limit per channel.
pub const REQUESTS_PER_MINUTE: u32 = 30;
