//! Configuration types
//!
//! One file per `AppConfig` section.

mod app;
mod embedding;
mod logging;
mod record_source;
mod server;

pub use app::AppConfig;
pub use embedding::EmbeddingConfig;
pub use logging::LoggingConfig;
pub use record_source::RecordSourceConfig;
pub use server::ServerConfig;
