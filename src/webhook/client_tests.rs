//! Tests for `ReqwestClient`.
//!
//! Requests against real endpoints are not exercised here; the webhook
//! operations are covered through the mock client instead.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn new_and_default_construct() {
        let _ = format!("{:?}", ReqwestClient::new());
        let _ = format!("{:?}", ReqwestClient::default());
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client.request(HttpRequest::delete(url)).await;

        // A proxy in the environment may answer with an error status instead.
        match result {
            Err(HttpError::Connection(_)) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
