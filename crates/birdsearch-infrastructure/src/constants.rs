//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "birdsearch.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "birdsearch";

/// Environment variable prefix for configuration overrides
///
/// Nested keys are separated by a double underscore, e.g.
/// `BIRDSEARCH__EMBEDDING__API_KEY`.
pub const CONFIG_ENV_PREFIX: &str = "BIRDSEARCH";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Record source used when none is configured
pub const DEFAULT_RECORD_SOURCE_PROVIDER: &str = "blob";

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "azure_openai";

/// Timeout for the corpus download, in seconds
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_FILTER_ENV_VAR: &str = "BIRDSEARCH_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "birdsearch";
