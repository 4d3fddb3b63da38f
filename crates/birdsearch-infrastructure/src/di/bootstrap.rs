//! Composition root
//!
//! ```text
//! AppConfig → factories → RecordSource + EmbeddingProvider → SearchServiceImpl
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use birdsearch_application::ports::SearchServiceInterface;
use birdsearch_application::use_cases::{SearchServiceConfig, SearchServiceImpl};
use birdsearch_domain::error::Result;

use crate::config::AppConfig;
use crate::di::factory::{EmbeddingProviderFactory, RecordSourceFactory, create_http_client};

/// Application context: configuration plus the wired search service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    search_service: Arc<dyn SearchServiceInterface>,
}

impl AppContext {
    /// The search service, shared with the transport layer
    pub fn search_service(&self) -> Arc<dyn SearchServiceInterface> {
        Arc::clone(&self.search_service)
    }
}

/// Build the application from configuration
///
/// Nothing is loaded or embedded here; the returned service starts
/// `Uninitialized`.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let http_client = create_http_client()?;

    let record_source = RecordSourceFactory::create(&config.record_source, Some(http_client.clone()))?;
    let embedding_provider = EmbeddingProviderFactory::create(&config.embedding, Some(http_client))?;

    info!(
        record_source = record_source.source_name(),
        embedding_provider = embedding_provider.provider_name(),
        "Providers created"
    );

    let service_config = SearchServiceConfig {
        embedding_timeout: Duration::from_secs(config.embedding.timeout_secs),
        embedding_concurrency: config.embedding.concurrency,
    };
    let search_service: Arc<dyn SearchServiceInterface> = Arc::new(
        SearchServiceImpl::with_config(record_source, embedding_provider, service_config),
    );

    Ok(AppContext {
        config: Arc::new(config),
        search_service,
    })
}
