//! Application execution logic.
//!
//! Wires the webhook, tools and MCP server together and serves stdio
//! until input closes or Ctrl+C arrives.

use thiserror::Error;
use tokio::io::BufReader;
use tokio::signal;

use discord_webhook_mcp::config::ValidatedConfig;
use discord_webhook_mcp::mcp::McpServer;
use discord_webhook_mcp::tools::WebhookTools;
use discord_webhook_mcp::webhook::{DiscordWebhook, ReqwestClient};

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading requests or writing responses failed.
    #[error("Stdio transport failed: {0}")]
    Stdio(#[source] std::io::Error),
}

/// Serves MCP requests on stdin/stdout.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
///
/// # Coverage Note
///
/// Excluded from coverage because it binds the real process stdio and
/// signal handler; the server itself is tested with in-memory streams.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let webhook = DiscordWebhook::new(ReqwestClient::new(), config.webhook_url);
    let server = McpServer::new(WebhookTools::new(webhook));

    tracing::info!("MCP server ready on stdio");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = server.serve(stdin, stdout) => result.map_err(RunError::Stdio),
        _ = signal::ctrl_c() => {
            tracing::info!("Received Ctrl+C, shutting down");
            Ok(())
        }
    }
}
