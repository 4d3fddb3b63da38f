//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in birdsearch-domain) and infrastructure
//! constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Default OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Azure OpenAI REST API version used when none is configured
pub const AZURE_OPENAI_DEFAULT_API_VERSION: &str = "2024-02-01";

/// Header carrying the Azure OpenAI resource key
pub const AZURE_API_KEY_HEADER: &str = "api-key";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Prefix of request timeout error messages
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
