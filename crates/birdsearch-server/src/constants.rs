//! Response messages
//!
//! Clients only ever see these fixed strings; internal error text stays in
//! the logs.

/// GET /search without a usable `query` parameter
pub const MSG_QUERY_PARAMETER_REQUIRED: &str = "Query parameter is required";

/// POST /search with a blank `query`
pub const MSG_QUERY_REQUIRED: &str = "Query is required";

/// POST /search body that is not a JSON object of the expected shape
pub const MSG_INVALID_REQUEST_BODY: &str = "Request body must be a JSON object with a query";

/// `topK` missing from `[1, 50]` or not a number
pub const MSG_TOP_K_OUT_OF_RANGE: &str = "topK must be between 1 and 50";

/// Search received before the corpus is indexed
pub const MSG_SERVICE_INITIALIZING: &str = "Service is initializing, please try again shortly";

/// Any other search failure
pub const MSG_SEARCH_FAILED: &str = "An error occurred processing your search";

/// Health status when the service accepts searches
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

/// Health status while the corpus is not indexed
pub const HEALTH_STATUS_INITIALIZING: &str = "initializing";

/// Liveness status
pub const LIVENESS_STATUS_ALIVE: &str = "alive";
