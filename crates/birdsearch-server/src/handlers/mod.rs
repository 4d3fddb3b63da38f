//! HTTP handlers
//!
//! - `search`: GET and POST /search
//! - `health`: readiness and liveness checks

pub mod health;
pub mod search;

pub use health::liveness;
pub use search::{search_get, search_post};
