//! Configuration management
//!
//! Layered loading (defaults → TOML file → environment) and validation of
//! the application configuration.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, EmbeddingConfig, LoggingConfig, RecordSourceConfig, ServerConfig};
