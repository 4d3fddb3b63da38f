//! # Bird Semantic Search Server
//!
//! HTTP transport for the bird semantic search service.
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/search?query=&topK=` | GET | Rank the corpus against a query |
//! | `/search` | POST | Same, with a JSON body `{query, topK}` |
//! | `/health` | GET | Readiness (200 when ready, 503 while initializing) |
//! | `/healthz` | GET | Liveness, always 200 |
//!
//! ## Startup
//!
//! [`run`] loads configuration, installs logging, wires the providers,
//! spawns corpus initialization in the background and starts serving
//! immediately. Searches answer 503 until initialization completes.

pub mod constants;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;
pub mod state;

pub use init::run;
pub use routes::build_rocket;
pub use state::ApiState;
