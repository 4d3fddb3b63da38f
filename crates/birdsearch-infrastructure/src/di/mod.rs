//! Provider wiring
//!
//! - `factory`: configuration → concrete providers
//! - `bootstrap`: providers → search service (`AppContext`)

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{AppContext, init_app};
pub use factory::{EmbeddingProviderFactory, RecordSourceFactory};
