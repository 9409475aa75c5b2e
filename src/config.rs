//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default upstream employee API endpoint.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://localhost:8112/api/v1/employee";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream employee collection
    pub upstream_base_url: String,
    /// Attempts per upstream call before giving up on rate limiting
    pub max_attempts: u32,
    /// Fixed pause between rate-limited attempts, in milliseconds
    pub retry_delay_ms: u64,
    /// Per-attempt network timeout, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8111)
    /// - `UPSTREAM_BASE_URL` - Upstream employee endpoint
    ///   (default: `http://localhost:8112/api/v1/employee`)
    /// - `UPSTREAM_MAX_ATTEMPTS` - Attempts per upstream call (default: 10)
    /// - `UPSTREAM_RETRY_DELAY_MS` - Pause between attempts (default: 10000)
    /// - `UPSTREAM_TIMEOUT_SECS` - Per-attempt timeout (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.upstream_base_url),
            max_attempts: parse_var("UPSTREAM_MAX_ATTEMPTS")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_attempts),
            retry_delay_ms: parse_var("UPSTREAM_RETRY_DELAY_MS").unwrap_or(defaults.retry_delay_ms),
            request_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Pause between rate-limited attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Per-attempt network timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8111,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            max_attempts: 10,
            retry_delay_ms: 10_000,
            request_timeout_secs: 5,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
