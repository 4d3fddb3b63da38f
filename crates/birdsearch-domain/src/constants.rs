//! Domain layer constants
//!
//! Search limits and identifiers shared by the application and transport
//! layers. Infrastructure-specific constants live in
//! `birdsearch_infrastructure::constants`.

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Number of results returned when the caller does not ask for a count
pub const DEFAULT_TOP_K: usize = 5;

/// Smallest accepted `top_k`
pub const MIN_TOP_K: usize = 1;

/// Largest accepted `top_k`
pub const MAX_TOP_K: usize = 50;

// ============================================================================
// INGESTION DOMAIN CONSTANTS
// ============================================================================

/// Presence code that marks a resident (breeding) species
pub const PRESENCE_RESIDENT_CODE: &str = "R";

/// Emit an ingestion progress line every this many embedded records
pub const INGESTION_PROGRESS_INTERVAL: usize = 10;

/// Number of characters of embedded text echoed into debug logs
pub const EMBEDDING_LOG_PREVIEW_CHARS: usize = 50;

/// Default upper bound on a single embedding call, in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// Default number of corpus embedding calls in flight at once
pub const DEFAULT_EMBEDDING_CONCURRENCY: usize = 4;

// ============================================================================
// SERVICE IDENTITY
// ============================================================================

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "semantic-search-api";
