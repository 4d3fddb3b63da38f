//! Search handlers
//!
//! Both routes validate the request, then delegate to the search service.
//! Service errors become fixed client messages:
//!
//! | Error | Status |
//! |-------|--------|
//! | `InvalidArgument` | 400 |
//! | `NotReady` | 503 |
//! | anything else | 500 |

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{FromForm, State, get, post};
use tracing::{debug, error};

use birdsearch_domain::Error;
use birdsearch_domain::constants::{DEFAULT_TOP_K, MAX_TOP_K, MIN_TOP_K};

use crate::constants::{
    MSG_INVALID_REQUEST_BODY, MSG_QUERY_PARAMETER_REQUIRED, MSG_QUERY_REQUIRED,
    MSG_SEARCH_FAILED, MSG_SERVICE_INITIALIZING, MSG_TOP_K_OUT_OF_RANGE,
};
use crate::models::{ErrorResponse, SearchRequest, SearchResponse};
use crate::state::ApiState;

/// Error half of every handler result
pub type ApiError = (Status, Json<ErrorResponse>);

/// Query string of GET /search
///
/// `topK` stays a string so a non-numeric value is reported as out of range
/// instead of being silently replaced by the default.
#[derive(Debug, FromForm)]
pub struct SearchParams {
    #[field(name = uncased("query"))]
    pub query: Option<String>,
    #[field(name = uncased("topk"))]
    pub top_k: Option<String>,
}

/// Search by query string
///
/// GET /search?query=<text>&topK=<n>
#[get("/search?<params..>")]
pub async fn search_get(
    state: &State<ApiState>,
    params: SearchParams,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(bad_request(MSG_QUERY_PARAMETER_REQUIRED));
    }

    let top_k = match params.top_k.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_TOP_K,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| bad_request(MSG_TOP_K_OUT_OF_RANGE))?,
    };

    execute_search(state, query, top_k).await
}

/// Search by JSON body
///
/// POST /search `{"query": "<text>", "topK": <n>}`; `topK` defaults to 5 when
/// absent or `null`. A body that is not valid JSON for this shape is a 400.
#[post("/search", data = "<request>")]
pub async fn search_post(
    state: &State<ApiState>,
    request: Result<Json<SearchRequest>, json::Error<'_>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let SearchRequest { query, top_k } = match request {
        Ok(body) => body.into_inner(),
        Err(e) => {
            debug!(error = ?e, "Unreadable search request body");
            return Err(bad_request(MSG_INVALID_REQUEST_BODY));
        }
    };

    let query = query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(bad_request(MSG_QUERY_REQUIRED));
    }

    let top_k = match top_k {
        None => DEFAULT_TOP_K,
        Some(n) => n
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| bad_request(MSG_TOP_K_OUT_OF_RANGE))?,
    };

    execute_search(state, query, top_k).await
}

async fn execute_search(
    state: &ApiState,
    query: String,
    top_k: usize,
) -> Result<Json<SearchResponse>, ApiError> {
    if !(MIN_TOP_K..=MAX_TOP_K).contains(&top_k) {
        return Err(bad_request(MSG_TOP_K_OUT_OF_RANGE));
    }

    match state.search_service().search(&query, top_k).await {
        Ok(results) => Ok(Json(SearchResponse::new(query, results))),
        Err(e) => Err(error_response(&e, &query)),
    }
}

/// Translate a service error into a status and a fixed message
fn error_response(err: &Error, query: &str) -> ApiError {
    match err {
        // Validation messages are written for callers
        Error::InvalidArgument { message } => {
            debug!(query = %query, error = %err, "Search request rejected");
            bad_request(message)
        }
        Error::NotReady { .. } => {
            debug!(query = %query, error = %err, "Search requested before the index is ready");
            (
                Status::ServiceUnavailable,
                ErrorResponse::json(MSG_SERVICE_INITIALIZING),
            )
        }
        _ => {
            error!(query = %query, error = %err, "Error processing search request");
            (
                Status::InternalServerError,
                ErrorResponse::json(MSG_SEARCH_FAILED),
            )
        }
    }
}

fn bad_request(message: &str) -> ApiError {
    (Status::BadRequest, ErrorResponse::json(message))
}
