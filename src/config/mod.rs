//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! The webhook URL is resolved with the following priority (highest to lowest):
//!
//! 1. **`--webhook-url`** on the command line
//! 2. **`DISCORD_WEBHOOK_URL`** in the process environment
//! 3. **`DISCORD_WEBHOOK_URL`** in a dotenv file (`--env-file`, else `./.env` if present)
//!
//! Dotenv files are read without modifying the process environment.
//! A missing or invalid URL is a startup error; the server never starts
//! without a usable webhook.

mod cli;
pub mod defaults;
mod error;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::Cli;
pub use error::{ConfigError, field};
pub use validated::ValidatedConfig;
