//! Discord Webhook MCP server.
//!
//! A library for sending, editing and deleting Discord messages through a
//! single webhook, exposed as tools over the Model Context Protocol.

pub mod config;
pub mod mcp;
pub mod message;
pub mod tools;
pub mod webhook;
