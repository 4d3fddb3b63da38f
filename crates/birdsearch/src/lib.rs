//! # Bird Semantic Search
//!
//! Query-by-text search over a static corpus of bird species records. Every
//! record is embedded once at startup; queries are embedded on arrival and
//! ranked by cosine similarity.
//!
//! ## Example
//!
//! ```ignore
//! use birdsearch::infrastructure::{ConfigLoader, init_app};
//!
//! let config = ConfigLoader::new().with_config_path("birdsearch.toml").load()?;
//! let context = init_app(config)?;
//! let service = context.search_service();
//!
//! service.initialize().await?;
//! for result in service.search("large owl found in rocky hills", 5).await? {
//!     println!("{:.3} {}", result.score, result.content);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - records, value objects, ports and errors
//! - `application` - vector index and search service
//! - `infrastructure` - configuration, logging and provider wiring
//! - `server` - Rocket HTTP API

/// Domain layer - core types and contracts
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use birdsearch_domain::*;
}

/// Application layer - vector index and search service
pub mod application {
    pub use birdsearch_application::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use birdsearch_infrastructure::*;
}

/// Server layer - HTTP handlers and startup
pub mod server {
    pub use birdsearch_server::*;
}

pub use domain::*;

pub use server::run;
