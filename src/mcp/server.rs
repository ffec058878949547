//! Request dispatch and the stdio loop.

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::tools::{WebhookTools, definitions};
use crate::webhook::HttpClient;

use super::protocol::{JsonRpcRequest, JsonRpcResponse, error_code};

/// MCP protocol revision implemented by this server.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "discord-webhook";

/// MCP server exposing the webhook tools.
#[derive(Debug)]
pub struct McpServer<H> {
    tools: WebhookTools<H>,
}

impl<H: HttpClient> McpServer<H> {
    #[must_use]
    pub const fn new(tools: WebhookTools<H>) -> Self {
        Self { tools }
    }

    /// Serves requests until `reader` reaches end of input.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading a line or writing a response fails.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line).await,
                Err(e) => {
                    tracing::warn!("Non UTF-8 input line: {e}");
                    encode(&JsonRpcResponse::error(
                        None,
                        error_code::PARSE_ERROR,
                        format!("Parse error: {e}"),
                    ))
                }
            };
            let Some(response) = response else {
                continue;
            };
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handles one raw line, returning the serialized response if any.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle(request).await?,
            Err(e) => {
                tracing::warn!("Malformed JSON-RPC message: {e}");
                JsonRpcResponse::error(None, error_code::PARSE_ERROR, format!("Parse error: {e}"))
            }
        };
        encode(&response)
    }

    /// Dispatches a parsed request.
    ///
    /// Returns `None` for notifications.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "MCP request received");

        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification acknowledged");
            return None;
        }

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                error_code::INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::result(request.id, initialize_result()),
            "ping" => JsonRpcResponse::result(request.id, json!({})),
            "tools/list" => {
                JsonRpcResponse::result(request.id, json!({ "tools": definitions() }))
            }
            "tools/call" => self.handle_tools_call(request).await,
            _ => JsonRpcResponse::error(
                request.id,
                error_code::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };
        Some(response)
    }

    async fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let Some(name) = request.params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                request.id,
                error_code::INVALID_PARAMS,
                "Missing required parameter: name",
            );
        };

        let arguments = request
            .params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        let result = match self.tools.call(name, arguments).await {
            Some(outcome) => outcome.to_call_result(),
            None => json!({
                "content": [{ "type": "text", "text": format!("Unknown tool: {name}") }],
                "isError": true
            }),
        };
        JsonRpcResponse::result(request.id, result)
    }
}

fn encode(response: &JsonRpcResponse) -> Option<String> {
    match serde_json::to_string(response) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::error!("Failed to serialize response: {e}");
            None
        }
    }
}

fn initialize_result() -> Value {
    tracing::info!("MCP initialize request received");
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
