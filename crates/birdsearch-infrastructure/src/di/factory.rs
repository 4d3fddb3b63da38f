//! Provider Factory
//!
//! Creates embedding providers and record sources from configuration.
//! All implementations come from `birdsearch-providers`; this module only
//! handles wiring.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use birdsearch_domain::error::{Error, Result};
use birdsearch_domain::ports::providers::{EmbeddingProvider, RecordSource};
use birdsearch_providers::constants::OPENAI_DEFAULT_MODEL;
use birdsearch_providers::embedding::{
    AzureOpenAIEmbeddingProvider, NullEmbeddingProvider, OpenAIEmbeddingProvider,
};
use birdsearch_providers::record_source::{BlobRecordSource, FileRecordSource};

use crate::config::{EmbeddingConfig, RecordSourceConfig};
use crate::error_ext::ErrorContext;

/// Known embedding provider names
pub mod embedding_providers {
    pub const AZURE_OPENAI: &str = "azure_openai";
    pub const OPENAI: &str = "openai";
    pub const NULL: &str = "null";
}

/// Known record source names
pub mod record_sources {
    pub const BLOB: &str = "blob";
    pub const FILE: &str = "file";
}

/// Factory for creating embedding providers
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create an embedding provider based on configuration
    ///
    /// The `http_client` parameter is optional. If not provided, a default
    /// client will be created for providers that need HTTP access.
    pub fn create(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        match config.provider.to_lowercase().as_str() {
            embedding_providers::AZURE_OPENAI => Self::create_azure_openai(config, http_client),
            embedding_providers::OPENAI => Self::create_openai(config, http_client),
            embedding_providers::NULL => Ok(Arc::new(NullEmbeddingProvider::new())),
            _ => Err(Error::config(format!(
                "Unknown embedding provider: {}",
                config.provider
            ))),
        }
    }

    fn create_azure_openai(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let endpoint = required(config.endpoint.as_deref(), "embedding.endpoint")?;
        let deployment = required(config.deployment.as_deref(), "embedding.deployment")?;
        Ok(Arc::new(AzureOpenAIEmbeddingProvider::new(
            endpoint,
            deployment,
            config.api_key.clone(),
            config.api_version.clone(),
            Duration::from_secs(config.timeout_secs),
            require_http_client(http_client)?,
        )))
    }

    fn create_openai(
        config: &EmbeddingConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        let api_key = required(config.api_key.as_deref(), "embedding.api_key")?;
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string());
        Ok(Arc::new(OpenAIEmbeddingProvider::new(
            api_key,
            config.endpoint.clone(),
            model,
            Duration::from_secs(config.timeout_secs),
            require_http_client(http_client)?,
        )?))
    }
}

/// Factory for creating record sources
pub struct RecordSourceFactory;

impl RecordSourceFactory {
    /// Create a record source based on configuration
    pub fn create(
        config: &RecordSourceConfig,
        http_client: Option<Client>,
    ) -> Result<Arc<dyn RecordSource>> {
        match config.provider.to_lowercase().as_str() {
            record_sources::BLOB => Ok(Arc::new(BlobRecordSource::new(
                required(config.url.as_deref(), "record_source.url")?,
                required(
                    config.container_name.as_deref(),
                    "record_source.container_name",
                )?,
                required(config.file_name.as_deref(), "record_source.file_name")?,
                config.sas_token.clone(),
                Duration::from_secs(config.timeout_secs),
                require_http_client(http_client)?,
            ))),
            record_sources::FILE => {
                let path = config
                    .path
                    .clone()
                    .ok_or_else(|| Error::config("record_source.path not configured"))?;
                Ok(Arc::new(FileRecordSource::new(path)))
            }
            _ => Err(Error::config(format!(
                "Unknown record source: {}",
                config.provider
            ))),
        }
    }
}

/// Create the HTTP client shared by HTTP-backed providers
pub fn create_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("birdsearch/", env!("CARGO_PKG_VERSION")))
        .build()
        .network_context("Failed to create HTTP client")
}

fn require_http_client(client: Option<Client>) -> Result<Client> {
    client.map_or_else(create_http_client, Ok)
}

fn required(value: Option<&str>, key: &str) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::config(format!("{key} not configured")))
}
