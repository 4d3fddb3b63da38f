//! Domain Ports
//!
//! Contracts for the external collaborators the search service depends on.
//! Concrete adapters live in `birdsearch-providers`.

/// External provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, RecordSource};
