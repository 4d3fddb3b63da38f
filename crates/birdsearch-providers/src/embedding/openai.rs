//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API, or any
//! server exposing the same `/embeddings` contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use birdsearch_domain::error::{Error, Result};
use birdsearch_domain::ports::providers::EmbeddingProvider;
use birdsearch_domain::value_objects::Embedding;

use crate::constants::{CONTENT_TYPE_JSON, OPENAI_DEFAULT_BASE_URL};
use crate::embedding::helpers::{constructor, parse_embedding_data, request_error};
use crate::utils::HttpResponseUtils;

/// OpenAI embedding provider
///
/// ## Example
///
/// ```rust,no_run
/// use birdsearch_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = OpenAIEmbeddingProvider::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "text-embedding-3-small".to_string(),
///         Duration::from_secs(30),
///         client,
///     )?;
///     Ok(())
/// }
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key (must not be blank)
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Result<Self> {
        let api_key = constructor::validate_api_key(Some(api_key))
            .ok_or_else(|| Error::config("OpenAI requires an api_key"))?;
        let base_url = constructor::get_effective_url(base_url.as_deref(), OPENAI_DEFAULT_BASE_URL);

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout,
            http_client,
        })
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| request_error("OpenAI", self.timeout, &e))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI").await
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;
        parse_embedding_data(&response_data, texts.len(), &self.model)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
