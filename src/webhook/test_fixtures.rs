//! Shared mock HTTP client for webhook, tool and server tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub const WEBHOOK_URL: &str = "https://discord.com/api/webhooks/123/secret-token";

/// Mock HTTP client that replays a queue of canned results.
///
/// Panics if called more often than results were queued.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Responds once with the given status and body.
    pub fn respond(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(response(status, body))])
    }

    /// Responds once with a Discord message object.
    pub fn message(id: &str, channel_id: &str, timestamp: &str) -> Self {
        let body = serde_json::json!({
            "id": id,
            "channel_id": channel_id,
            "timestamp": timestamp,
            "content": "echo",
            "type": 0
        });
        Self::respond(200, &body.to_string())
    }

    /// Fails once at the transport level.
    pub fn unreachable() -> Self {
        Self::new(vec![Err(HttpError::Connection(Box::new(
            std::io::Error::other("connection refused"),
        )))])
    }

    /// A client that must never be called.
    pub fn untouched() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The JSON body of the n-th captured request.
    pub fn json_body(&self, index: usize) -> serde_json::Value {
        let requests = self.captured_requests();
        let body = requests[index].body.as_ref().expect("request has a body");
        serde_json::from_slice(body).unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

pub fn webhook_url() -> url::Url {
    url::Url::parse(WEBHOOK_URL).unwrap()
}
