//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation services |
//! | RecordSource | Supplier of the searchable corpus |

/// Embedding provider port
pub mod embedding;
/// Record source port
pub mod record_source;

pub use embedding::EmbeddingProvider;
pub use record_source::RecordSource;
