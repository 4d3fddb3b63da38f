//! Application Ports
//!
//! - `services`: contracts implemented by the application's use cases
//!
//! Provider ports are defined in `birdsearch_domain::ports` and re-exported
//! here so callers need a single import path.

/// Application service interfaces
pub mod services;

pub use birdsearch_domain::ports::providers::{EmbeddingProvider, RecordSource};
pub use services::SearchServiceInterface;
