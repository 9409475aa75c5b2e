//! Upstream Client
//!
//! One logical upstream call: send, classify, maybe sleep and resend,
//! then unwrap the response envelope.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::retry::{classify, Decision, RetryPolicy};
use super::transport::{Transport, UpstreamRequest};
use crate::error::{ApiError, Result};
use crate::models::Envelope;

/// Client for the upstream employee collection rooted at `base_url`.
#[derive(Clone)]
pub struct UpstreamClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    policy: RetryPolicy,
}

impl UpstreamClient {
    /// Creates a client. A trailing `/` on `base_url` is ignored.
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        policy: RetryPolicy,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            policy,
        }
    }

    /// URL of the employee collection.
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single employee.
    pub fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// GET `url` and unwrap the envelope payload.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.call(Method::GET, url, None).await
    }

    /// POST `body` as JSON to `url` and unwrap the envelope payload.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        self.call(Method::POST, url, Some(to_json(body)?)).await
    }

    /// DELETE `url` with `body` as JSON and unwrap the envelope payload.
    pub async fn delete<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        self.call(Method::DELETE, url, Some(to_json(body)?)).await
    }

    /// Performs one logical call, retrying while the upstream rate-limits.
    ///
    /// # Errors
    /// - `NotFound` on 404, immediately
    /// - `Timeout` once every attempt was rate-limited
    /// - `Upstream` on any other failure, including an undecodable envelope
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let request = UpstreamRequest {
            method,
            url: url.to_string(),
            body,
        };

        let mut attempt: u32 = 1;
        loop {
            info!("Attempt {}: [{}] {}", attempt, request.method, request.url);

            let outcome = classify(self.transport.send(&request).await);
            match self.policy.decide(attempt, outcome) {
                Decision::Accept(bytes) => return decode(&bytes),
                Decision::RetryAfter(delay) => {
                    warn!(
                        "Rate limited on attempt {} of {}, retrying in {:?}",
                        attempt, self.policy.max_attempts, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Decision::Fail(err) => {
                    warn!("[{}] {} failed: {}", request.method, request.url, err);
                    return Err(err);
                }
            }
        }
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::Upstream(format!("failed to encode request body: {}", e)))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice::<Envelope<T>>(bytes)
        .map(Envelope::into_data)
        .map_err(|e| ApiError::Upstream(format!("malformed upstream response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::time::Instant;
    use tokio_test::{assert_err, assert_ok};

    use crate::upstream::{ScriptedTransport, StatusCode, UpstreamResponse};

    const BASE: &str = "http://localhost:8112/api/v1/employee";

    fn client_with(transport: Arc<ScriptedTransport>) -> UpstreamClient {
        UpstreamClient::new(transport, BASE, RetryPolicy::default())
    }

    #[test]
    fn test_urls() {
        let client = UpstreamClient::new(
            Arc::new(ScriptedTransport::new()),
            format!("{}/", BASE),
            RetryPolicy::default(),
        );
        assert_eq!(client.collection_url(), BASE);
        assert_eq!(client.record_url("abc"), format!("{}/abc", BASE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_first_attempt() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_envelope(vec![1, 2, 3]);
        let client = client_with(transport.clone());

        let data: Vec<i32> = assert_ok!(client.get(BASE).await);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_through_rate_limit() {
        let transport = Arc::new(ScriptedTransport::new());
        for _ in 0..3 {
            transport.push_status(StatusCode::TOO_MANY_REQUESTS);
        }
        transport.push_envelope(true);
        let client = client_with(transport.clone());

        let started = Instant::now();
        let deleted: bool = assert_ok!(client.get(BASE).await);

        assert!(deleted);
        assert_eq!(transport.request_count(), 4);
        // Three pauses of ten seconds each, measured in paused virtual time
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(30), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(40), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_time_out() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .with_fallback(UpstreamResponse::status_only(StatusCode::TOO_MANY_REQUESTS)),
        );
        let client = client_with(transport.clone());

        let started = Instant::now();
        let err = assert_err!(client.get::<bool>(BASE).await);

        assert_eq!(err, ApiError::Timeout("failed to access external api".into()));
        assert_eq!(transport.request_count(), 10);
        // No pause after the final attempt
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(90), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(100), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_is_not_retried() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_status(StatusCode::NOT_FOUND);
        let client = client_with(transport.clone());

        let err = assert_err!(client.get::<bool>(&client.record_url("missing")).await);
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_is_not_retried() {
        let transport = Arc::new(ScriptedTransport::new());
        transport
            .push_status(StatusCode::INTERNAL_SERVER_ERROR)
            .push_envelope(true);
        let client = client_with(transport.clone());

        let err = assert_err!(client.get::<bool>(BASE).await);
        assert!(matches!(err, ApiError::Upstream(_)));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_error_is_upstream_error() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_error("connection refused");
        let client = client_with(transport.clone());

        let err = assert_err!(client.get::<bool>(BASE).await);
        assert!(matches!(err, ApiError::Upstream(msg) if msg.contains("connection refused")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_envelope_is_upstream_error() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(UpstreamResponse::new(StatusCode::OK, b"not json".to_vec()));
        let client = client_with(transport.clone());

        let err = assert_err!(client.get::<bool>(BASE).await);
        assert!(matches!(err, ApiError::Upstream(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_payload_shape_is_upstream_error() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_envelope("not a bool");
        let client = client_with(transport.clone());

        let err = assert_err!(client.get::<bool>(BASE).await);
        assert!(matches!(err, ApiError::Upstream(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_sends_json_body() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_envelope(serde_json::json!({ "id": "new" }));
        let client = client_with(transport.clone());

        let body = serde_json::json!({ "name": "Joe", "salary": 5, "age": 30, "title": "Cook" });
        let created: Value = assert_ok!(client.post(BASE, &body).await);
        assert_eq!(created["id"], "new");

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].url, BASE);
        assert_eq!(requests[0].body, Some(body));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_sends_json_body() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_envelope(true);
        let client = client_with(transport.clone());

        let body = serde_json::json!({ "name": "Bob" });
        let _: bool = assert_ok!(client.delete(BASE, &body).await);

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].url, BASE);
        assert_eq!(requests[0].body, Some(body));
    }
}
