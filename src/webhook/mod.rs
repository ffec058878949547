//! Webhook layer for talking to Discord over HTTP.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Executing, editing and deleting webhook messages ([`DiscordWebhook`])

mod client;
mod discord;
mod error;
mod http;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use client::ReqwestClient;
pub use discord::{DiscordWebhook, WebhookMessage};
pub use error::{HttpError, WebhookError, status_text};
pub use http::{HttpClient, HttpRequest, HttpResponse};
