//! Upstream Transport
//!
//! The seam between the retry logic and the network. `ReqwestTransport`
//! does real HTTP; `ScriptedTransport` replays canned responses and records
//! every request it receives, for deterministic offline tests.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Envelope;

// == Request / Response ==
/// A single upstream HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `content-type: application/json`
    pub body: Option<Value>,
}

/// Raw upstream response: status plus undecoded body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A bodyless response with the given status.
    pub fn status_only(status: StatusCode) -> Self {
        Self::new(status, Vec::new())
    }
}

/// Failure below the HTTP layer: connect, timeout, broken body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

// == Transport Trait ==
/// Sends one request and returns whatever came back, without interpretation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &UpstreamRequest) -> Result<UpstreamResponse, TransportError>;
}

// == Reqwest Transport ==
/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport whose every attempt is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("employee_gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(UpstreamResponse::new(status, body.to_vec()))
    }
}

// == Scripted Transport ==
/// Replays queued responses in order and records every request.
///
/// Once the queue is drained the fallback response is returned, if one is
/// set; otherwise the call fails with a `TransportError`.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<UpstreamResponse, TransportError>>>,
    fallback: Option<UpstreamResponse>,
    requests: Mutex<Vec<UpstreamRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every request not covered by the queue with `response`.
    pub fn with_fallback(mut self, response: UpstreamResponse) -> Self {
        self.fallback = Some(response);
        self
    }

    /// Queues a raw response.
    pub fn push(&self, response: UpstreamResponse) -> &Self {
        lock(&self.responses).push_back(Ok(response));
        self
    }

    /// Queues a bodyless response with the given status.
    pub fn push_status(&self, status: StatusCode) -> &Self {
        self.push(UpstreamResponse::status_only(status))
    }

    /// Queues a 200 response wrapping `data` in the upstream envelope.
    pub fn push_envelope<T: Serialize>(&self, data: T) -> &Self {
        let body = serde_json::to_vec(&Envelope::ok(data)).unwrap_or_default();
        self.push(UpstreamResponse::new(StatusCode::OK, body))
    }

    /// Queues a transport-level failure.
    pub fn push_error(&self, message: impl Into<String>) -> &Self {
        lock(&self.responses).push_back(Err(TransportError(message.into())));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<UpstreamRequest> {
        lock(&self.requests).clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
        lock(&self.requests).push(request.clone());

        match lock(&self.responses).pop_front() {
            Some(next) => next,
            None => self
                .fallback
                .clone()
                .ok_or_else(|| TransportError("no scripted response left".to_string())),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
