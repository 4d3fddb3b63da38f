//! Azure OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port against an Azure OpenAI resource.
//! Requests go to a named deployment rather than a model:
//!
//! ```text
//! POST {endpoint}/openai/deployments/{deployment}/embeddings?api-version={version}
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use birdsearch_domain::error::Result;
use birdsearch_domain::ports::providers::EmbeddingProvider;
use birdsearch_domain::value_objects::Embedding;

use crate::constants::{AZURE_API_KEY_HEADER, AZURE_OPENAI_DEFAULT_API_VERSION, CONTENT_TYPE_JSON};
use crate::embedding::helpers::{constructor, parse_embedding_data, request_error};
use crate::utils::HttpResponseUtils;

/// Azure OpenAI embedding provider
///
/// Receives the HTTP client via constructor injection. When no API key is
/// configured the request carries no `api-key` header, which suits
/// deployments fronted by a gateway that injects credentials.
///
/// ## Example
///
/// ```rust,no_run
/// use birdsearch_providers::embedding::AzureOpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = AzureOpenAIEmbeddingProvider::new(
///     "https://my-resource.openai.azure.com".to_string(),
///     "text-embedding-ada-002".to_string(),
///     Some("azure-key".to_string()),
///     None,
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct AzureOpenAIEmbeddingProvider {
    endpoint: String,
    deployment: String,
    api_key: Option<String>,
    api_version: String,
    timeout: Duration,
    http_client: Client,
}

impl AzureOpenAIEmbeddingProvider {
    /// Create a new Azure OpenAI embedding provider
    ///
    /// # Arguments
    /// * `endpoint` - Resource endpoint, e.g. `https://name.openai.azure.com`
    /// * `deployment` - Embedding deployment name
    /// * `api_key` - Optional resource key
    /// * `api_version` - REST API version (defaults to a stable GA version)
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        endpoint: String,
        deployment: String,
        api_key: Option<String>,
        api_version: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_version = api_version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| AZURE_OPENAI_DEFAULT_API_VERSION.to_string());

        Self {
            endpoint: constructor::validate_url(&endpoint),
            deployment: deployment.trim().to_string(),
            api_key: constructor::validate_api_key(api_key),
            api_version,
            timeout,
            http_client,
        }
    }

    /// Get the deployment name
    pub fn deployment(&self) -> &str {
        &self.deployment
    }

    /// Get the REST API version
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Full URL of the embeddings operation
    pub fn embeddings_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/embeddings?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({ "input": texts });

        let mut request = self
            .http_client
            .post(self.embeddings_url())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(key) = &self.api_key {
            request = request.header(AZURE_API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| request_error("Azure OpenAI", self.timeout, &e))?;

        HttpResponseUtils::check_and_parse(response, "Azure OpenAI").await
    }
}

#[async_trait]
impl EmbeddingProvider for AzureOpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            deployment = %self.deployment,
            count = texts.len(),
            "Requesting Azure OpenAI embeddings"
        );
        let response_data = self.fetch_embeddings(texts).await?;
        parse_embedding_data(&response_data, texts.len(), &self.deployment)
    }

    fn provider_name(&self) -> &str {
        "azure_openai"
    }
}
