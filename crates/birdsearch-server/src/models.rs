//! Request and response bodies

use chrono::{DateTime, Utc};
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use birdsearch_domain::constants::SERVICE_NAME;
use birdsearch_domain::value_objects::SearchResult;

use crate::constants::{HEALTH_STATUS_HEALTHY, HEALTH_STATUS_INITIALIZING, LIVENESS_STATUS_ALIVE};

/// JSON body of POST /search
///
/// Both fields accept `null` as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Free-text query
    #[serde(default)]
    pub query: Option<String>,
    /// Number of results; any JSON number so negative or fractional input
    /// reaches range validation
    #[serde(default)]
    pub top_k: Option<Number>,
}

/// Successful search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query as received
    pub query: String,
    /// Number of entries in `results`
    pub results_count: usize,
    /// Ranked results, most similar first
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(query: String, results: Vec<SearchResult>) -> Self {
        Self {
            query,
            results_count: results.len(),
            results,
        }
    }
}

/// Error body shared by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Fixed, client-facing message
    pub error: String,
}

impl ErrorResponse {
    /// JSON error body with the given message
    pub fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: message.into(),
        })
    }
}

/// Readiness report for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `initializing`
    pub status: &'static str,
    /// Time the report was produced (UTC, RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// Service identifier
    pub service: &'static str,
    /// Whether searches are accepted
    pub ready: bool,
}

impl HealthResponse {
    pub fn new(ready: bool) -> Self {
        Self {
            status: if ready {
                HEALTH_STATUS_HEALTHY
            } else {
                HEALTH_STATUS_INITIALIZING
            },
            timestamp: Utc::now(),
            service: SERVICE_NAME,
            ready,
        }
    }
}

/// Liveness report for GET /healthz
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    /// Always `alive`
    pub status: &'static str,
}

impl Default for LivenessResponse {
    fn default() -> Self {
        Self {
            status: LIVENESS_STATUS_ALIVE,
        }
    }
}
