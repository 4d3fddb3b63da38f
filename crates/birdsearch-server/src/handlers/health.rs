//! Health checks

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};
use tracing::warn;

use crate::models::{HealthResponse, LivenessResponse};
use crate::state::ApiState;

/// Readiness check
///
/// GET /health answers 200 once the corpus is indexed and 503 before that
/// (including after a failed initialization).
#[get("/health")]
pub fn health(state: &State<ApiState>) -> (Status, Json<HealthResponse>) {
    let service = state.search_service();
    let readiness = service.readiness();
    let response = HealthResponse::new(readiness.is_ready());

    if response.ready {
        (Status::Ok, Json(response))
    } else {
        warn!(readiness = %readiness, "Health check failed - search service not initialized");
        (Status::ServiceUnavailable, Json(response))
    }
}

/// Liveness check
///
/// GET /healthz always answers 200 while the process serves requests.
#[get("/healthz")]
pub fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse::default())
}
