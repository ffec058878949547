//! Error type for parameter validation.

use std::fmt;

use thiserror::Error;

/// A single constraint violation at a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field, e.g. `embeds[0].fields[3].name`
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl Violation {
    /// Creates a violation for the given field path.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input rejected before any network call.
///
/// Aggregates every violation found in one pass. `field` names the
/// offending path (several paths are comma-separated).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Offending field path(s)
    pub field: String,
    /// Human-readable description
    pub message: String,
}

/// Well-known field identifiers used outside a concrete path.
pub mod field {
    /// Raised when neither text nor embeds are present.
    pub const CONTENT_OR_EMBEDS: &str = "content/embeds";
    /// Raised when the argument object itself cannot be decoded.
    pub const ARGUMENTS: &str = "arguments";
}

impl ValidationError {
    /// Creates a validation error for a single field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The "at least one of content or embeds" precondition failure.
    #[must_use]
    pub fn missing_content() -> Self {
        Self::new(
            field::CONTENT_OR_EMBEDS,
            "Either content or embeds must be provided",
        )
    }

    /// Folds collected violations into one error.
    ///
    /// Returns `None` when there is nothing to report.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        match violations.len() {
            0 => None,
            1 => violations
                .into_iter()
                .next()
                .map(|v| Self::new(v.field, v.message)),
            _ => {
                let fields = violations
                    .iter()
                    .map(|v| v.field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                let message = violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                Some(Self::new(fields, message))
            }
        }
    }

    /// Converts a serde decoding failure, naming the path serde stopped at.
    ///
    /// A missing key is reported against its parent object, so the key name
    /// is appended to the path. A failure at the root maps to
    /// [`field::ARGUMENTS`].
    #[must_use]
    pub fn from_decode(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = error.path().to_string();
        let text = error.into_inner().to_string();

        let mut segments = Vec::with_capacity(2);
        if path != "." {
            segments.push(path);
        }
        if let Some(name) = missing_field_name(&text) {
            segments.push(name.to_string());
        }

        let field = if segments.is_empty() {
            field::ARGUMENTS.to_string()
        } else {
            segments.join(".")
        };
        Self::new(field, text)
    }
}

fn missing_field_name(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(name, _)| name)
}
