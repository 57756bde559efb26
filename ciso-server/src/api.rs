//! API response types
//!
//! Metric payloads are the `ciso-core` types serialized as-is; only the
//! envelopes owned by the server live here.

use serde::{Deserialize, Serialize};

pub use ciso_core::{ControlsCoverage, DashboardMetrics, ExecutiveKpis, IncidentPoint};

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving
    pub status: String,
}

impl HealthResponse {
    /// The liveness answer
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Error envelope for every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable fault description
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_shape() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_error_shape() {
        let body = ErrorResponse {
            error: "boom".to_string(),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"boom"}"#);
    }
}
