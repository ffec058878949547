//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Messages never include the webhook URL itself, since it embeds the
/// webhook token.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse a dotenv file.
    #[error("Failed to read env file '{}': {source}", path.display())]
    EnvFile {
        /// Path to the dotenv file
        path: PathBuf,
        /// Underlying dotenv error
        #[source]
        source: dotenvy::Error,
    },

    /// Missing required value.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The webhook URL does not parse.
    #[error("Invalid webhook URL: {reason}")]
    InvalidUrl {
        /// Reason for invalidity
        reason: String,
    },

    /// The webhook URL is not http or https.
    #[error("Unsupported webhook URL scheme '{0}': expected http or https")]
    UnsupportedScheme(String),
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The webhook URL field.
    pub const WEBHOOK_URL: &str = "webhook_url";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
