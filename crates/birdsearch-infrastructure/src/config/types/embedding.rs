//! Embedding provider configuration

use serde::{Deserialize, Serialize};

use birdsearch_domain::constants::{DEFAULT_EMBEDDING_CONCURRENCY, DEFAULT_EMBEDDING_TIMEOUT_SECS};

use crate::constants::DEFAULT_EMBEDDING_PROVIDER;

/// Embedding provider configuration
///
/// | Provider | Required |
/// |----------|----------|
/// | `azure_openai` | `endpoint`, `deployment` (`api_key`, `api_version` optional) |
/// | `openai` | `api_key` (`endpoint`, `model` optional) |
/// | `null` | nothing |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name
    pub provider: String,

    /// Service endpoint (Azure resource URL or OpenAI-compatible base URL)
    pub endpoint: Option<String>,

    /// Azure OpenAI deployment name
    pub deployment: Option<String>,

    /// API key
    pub api_key: Option<String>,

    /// Azure OpenAI REST API version
    pub api_version: Option<String>,

    /// Model name for the `openai` provider
    pub model: Option<String>,

    /// Upper bound on a single embedding call, in seconds
    pub timeout_secs: u64,

    /// Corpus embedding calls in flight at once
    pub concurrency: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            endpoint: None,
            deployment: None,
            api_key: None,
            api_version: None,
            model: None,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
            concurrency: DEFAULT_EMBEDDING_CONCURRENCY,
        }
    }
}
