//! Response DTOs for the employee gateway
//!
//! Defines the upstream envelope and the gateway's own response bodies.

use serde::{Deserialize, Serialize};

/// Wrapper the upstream API puts around every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The payload
    pub data: T,
    /// Free-form status text, e.g. "Successfully processed request."
    #[serde(default)]
    pub status: Option<String>,
}

impl<T> Envelope<T> {
    /// Wraps `data` with the upstream's usual success status.
    pub fn ok(data: T) -> Self {
        Self {
            data,
            status: Some("Successfully processed request.".to_string()),
        }
    }

    /// Unwraps the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialize_bool() {
        let json = r#"{"data": true, "status": "Successfully processed request."}"#;
        let envelope: Envelope<bool> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_data());
    }

    #[test]
    fn test_envelope_status_optional() {
        let json = r#"{"data": [1, 2, 3]}"#;
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert!(envelope.status.is_none());
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_missing_data_is_error() {
        let json = r#"{"status": "Failed to process request."}"#;
        assert!(serde_json::from_str::<Envelope<bool>>(json).is_err());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
