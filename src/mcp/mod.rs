//! Model Context Protocol server over stdio.
//!
//! Line-delimited JSON-RPC 2.0: one request per line on stdin, one
//! response per line on stdout. Notifications get no response.

mod protocol;
mod server;


pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, error_code};
pub use server::{McpServer, PROTOCOL_VERSION, SERVER_NAME};
