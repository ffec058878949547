//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

/// Discord Webhook MCP server
///
/// Exposes send, edit and delete message tools for one Discord webhook
/// over the Model Context Protocol (JSON-RPC on stdin/stdout).
#[derive(Debug, Parser)]
#[command(name = "discord-webhook-mcp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Webhook URL (overrides DISCORD_WEBHOOK_URL)
    #[arg(long = "webhook-url", value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Path to a dotenv file providing DISCORD_WEBHOOK_URL
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
