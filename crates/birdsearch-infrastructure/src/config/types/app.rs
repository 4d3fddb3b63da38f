//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{EmbeddingConfig, LoggingConfig, RecordSourceConfig, ServerConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener
    pub server: ServerConfig,

    /// Where the corpus is loaded from
    pub record_source: RecordSourceConfig,

    /// Which embedding service is used and how it is called
    pub embedding: EmbeddingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
