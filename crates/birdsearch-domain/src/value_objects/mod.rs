//! Domain Value Objects
//!
//! Immutable value objects defined entirely by their attributes.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text for semantic search |
//! | [`SearchResult`] | Ranked record returned from a search |
//! | [`ReadinessState`] | Lifecycle state of the search service |

/// Semantic embedding value objects
pub mod embedding;
/// Service readiness lifecycle
pub mod readiness;
/// Search-related value objects
pub mod search;

pub use embedding::Embedding;
pub use readiness::ReadinessState;
pub use search::SearchResult;
