//! Upstream Module
//!
//! Everything needed to talk to the upstream employee API: a pluggable
//! transport, the fixed-delay retry policy, and the client that ties them
//! together and unwraps response envelopes.

mod client;
mod retry;
mod transport;

// Re-export public types
pub use client::UpstreamClient;
pub use retry::{classify, AttemptOutcome, Decision, RetryPolicy};
pub use transport::{
    ReqwestTransport, ScriptedTransport, Transport, TransportError, UpstreamRequest,
    UpstreamResponse,
};

/// HTTP verbs used against the upstream API.
pub use reqwest::Method;
/// HTTP status codes as reported by the transport.
pub use reqwest::StatusCode;
