//! Retry Policy
//!
//! Fixed-delay retry on rate limiting. Each attempt's raw result is first
//! classified into an `AttemptOutcome`, then `RetryPolicy::decide` maps
//! `(attempt, outcome)` to the next step. Both steps are pure; the client
//! owns the loop and the sleeping.

use std::time::Duration;

use reqwest::StatusCode;

use super::transport::{TransportError, UpstreamResponse};
use crate::error::ApiError;

/// Attempts per call before giving up on a rate-limited upstream.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
/// Pause between rate-limited attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Message carried by the error returned once the retry budget is spent.
pub const EXHAUSTED_MESSAGE: &str = "failed to access external api";

// == Outcome ==
/// What one attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// 2xx, with the undecoded body
    Success(Vec<u8>),
    /// 429
    RateLimited,
    /// 404
    NotFound,
    /// Anything else, with a reason for the log
    Failed(String),
}

/// Maps a raw transport result onto an outcome.
pub fn classify(result: Result<UpstreamResponse, TransportError>) -> AttemptOutcome {
    match result {
        Ok(response) if response.status.is_success() => AttemptOutcome::Success(response.body),
        Ok(response) if response.status == StatusCode::TOO_MANY_REQUESTS => {
            AttemptOutcome::RateLimited
        }
        Ok(response) if response.status == StatusCode::NOT_FOUND => AttemptOutcome::NotFound,
        Ok(response) => AttemptOutcome::Failed(format!("unexpected status {}", response.status)),
        Err(e) => AttemptOutcome::Failed(e.to_string()),
    }
}

// == Decision ==
/// What the client should do after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Stop and decode this body
    Accept(Vec<u8>),
    /// Sleep, then try again
    RetryAfter(Duration),
    /// Stop with this error
    Fail(ApiError),
}

// == Policy ==
/// Fixed-delay retry policy. Only rate limiting is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Decides the next step after attempt number `attempt` (1-based).
    ///
    /// No pause follows the final attempt.
    pub fn decide(&self, attempt: u32, outcome: AttemptOutcome) -> Decision {
        match outcome {
            AttemptOutcome::Success(body) => Decision::Accept(body),
            AttemptOutcome::RateLimited if attempt < self.max_attempts => {
                Decision::RetryAfter(self.delay)
            }
            AttemptOutcome::RateLimited => {
                Decision::Fail(ApiError::Timeout(EXHAUSTED_MESSAGE.to_string()))
            }
            AttemptOutcome::NotFound => {
                Decision::Fail(ApiError::NotFound("Entity not found".to_string()))
            }
            AttemptOutcome::Failed(reason) => Decision::Fail(ApiError::Upstream(reason)),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}
