//! The tool surface: send, edit and delete a message.
//!
//! This module provides:
//! - Tool metadata with JSON input schemas ([`definitions`], [`ToolDefinition`])
//! - The closed error taxonomy returned to callers ([`ToolError`])
//! - Structured results plus text summaries ([`ToolOutcome`], [`MessageSuccess`])
//! - Handlers wiring validation, payload assembly and the webhook ([`WebhookTools`])
//!
//! Handlers never fail: every problem is returned as a [`ToolError`] value.

mod catalog;
mod error;
mod handlers;
mod outcome;

#[cfg(test)]
mod catalog_tests;
#[cfg(test)]
mod handlers_tests;
#[cfg(test)]
mod outcome_tests;

pub use catalog::{ToolDefinition, ToolName, definitions};
pub use error::ToolError;
pub use handlers::WebhookTools;
pub use outcome::{MessageSuccess, ToolOutcome};
