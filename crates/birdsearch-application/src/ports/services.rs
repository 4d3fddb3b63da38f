//! Application Service Port Interfaces

use async_trait::async_trait;
use birdsearch_domain::error::Result;
use birdsearch_domain::value_objects::{ReadinessState, SearchResult};

// ============================================================================
// Search Service Interface
// ============================================================================

/// Semantic Search Service Interface
///
/// The only component the transport layer talks to. Owns the corpus
/// lifecycle and answers queries once the corpus has been embedded.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Load and embed the corpus
    ///
    /// Returns immediately when initialization is already running or has
    /// completed. A call after a failed attempt starts a new attempt.
    async fn initialize(&self) -> Result<()>;

    /// Rank the corpus against a free-text query
    ///
    /// Fails with `InvalidArgument` for a blank query or `top_k` outside
    /// `[1, 50]`, `NotReady` before initialization has completed, and
    /// `SearchFailed` when the query cannot be embedded.
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>>;

    /// Current lifecycle state
    fn readiness(&self) -> ReadinessState;

    /// Whether searches are currently accepted
    fn is_ready(&self) -> bool {
        self.readiness().is_ready()
    }

    /// Number of searchable records (0 until ready)
    fn corpus_size(&self) -> usize;
}
