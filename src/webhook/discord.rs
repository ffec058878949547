//! Discord webhook operations: execute, edit and delete a message.

use serde::Deserialize;

use crate::message::{OutboundMessage, WebhookPayload};

use super::{HttpClient, HttpRequest, HttpResponse, WebhookError};

/// The subset of Discord's message object returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebhookMessage {
    /// Message identifier, needed for later edits and deletes
    pub id: String,

    /// Channel (or thread) the message landed in
    #[serde(default)]
    pub channel_id: Option<String>,

    /// ISO 8601 creation or edit time
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A single Discord webhook.
///
/// Every operation issues exactly one request and never retries.
/// Query parameters already present on the configured URL are kept.
///
/// # Example
///
/// ```
/// use discord_webhook_mcp::webhook::{DiscordWebhook, ReqwestClient};
/// use url::Url;
///
/// let webhook = DiscordWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://discord.com/api/webhooks/1/token").unwrap(),
/// );
/// ```
#[derive(Debug)]
pub struct DiscordWebhook<H> {
    client: H,
    url: url::Url,
}

impl<H> DiscordWebhook<H> {
    /// Creates a webhook bound to `url` (`.../webhooks/{id}/{token}`).
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// URL for creating a message, with `wait=true` so Discord echoes it.
    fn execute_url(&self, thread_id: Option<&str>) -> url::Url {
        let mut url = self.url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("wait", "true");
            if let Some(thread_id) = thread_id {
                query.append_pair("thread_id", thread_id);
            }
        }
        url
    }

    /// URL of an existing message: `<webhook>/messages/{id}`.
    fn message_url(&self, message_id: &str) -> Result<url::Url, WebhookError> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|()| WebhookError::InvalidUrl("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("messages")
            .push(message_id);
        Ok(url)
    }
}

impl<H: HttpClient> DiscordWebhook<H> {
    /// Posts a new message and returns the message Discord created.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Status`] on a non-2xx response, and the
    /// other variants when no usable response was received.
    pub async fn execute(&self, message: &OutboundMessage) -> Result<WebhookMessage, WebhookError> {
        let url = self.execute_url(message.thread_id.as_deref());
        let request = HttpRequest::post(url)
            .with_json(&message.payload)
            .map_err(WebhookError::Encode)?;

        tracing::debug!(thread_id = ?message.thread_id, "Executing webhook");
        let response = self.send(request).await?;
        decode_message(&response)
    }

    /// Replaces the editable parts of a previously sent message.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn edit_message(
        &self,
        message_id: &str,
        payload: &WebhookPayload,
    ) -> Result<WebhookMessage, WebhookError> {
        let request = HttpRequest::patch(self.message_url(message_id)?)
            .with_json(payload)
            .map_err(WebhookError::Encode)?;

        tracing::debug!(message_id, "Editing webhook message");
        let response = self.send(request).await?;
        decode_message(&response)
    }

    /// Deletes a previously sent message.
    ///
    /// Discord answers `204 No Content`; any 2xx counts as success
    /// whatever the body.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Status`] on a non-2xx response, and the
    /// other variants when no response was received.
    pub async fn delete_message(&self, message_id: &str) -> Result<(), WebhookError> {
        let request = HttpRequest::delete(self.message_url(message_id)?);

        tracing::debug!(message_id, "Deleting webhook message");
        self.send(request).await.map(|_| ())
    }

    /// Sends one request and turns non-2xx statuses into errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, WebhookError> {
        let method = request.method.clone();
        let response = self.client.request(request).await?;

        if response.is_success() {
            return Ok(response);
        }

        tracing::warn!(%method, status = response.status.as_u16(), "Webhook request rejected");
        Err(WebhookError::Status {
            status: response.status,
            body: response.body_lossy().into_owned(),
        })
    }
}

fn decode_message(response: &HttpResponse) -> Result<WebhookMessage, WebhookError> {
    serde_json::from_slice(&response.body).map_err(WebhookError::Decode)
}
