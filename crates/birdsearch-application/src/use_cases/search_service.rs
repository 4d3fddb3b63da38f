//! Search Service Use Case
//!
//! Orchestrates corpus ingestion (record source → embedding provider →
//! vector index) and the query path (embedding provider → vector index).
//!
//! # Concurrency
//!
//! - Readiness lives in an atomic cell. Only the caller that wins the
//!   `Uninitialized|Failed → Initializing` compare-and-set runs ingestion.
//! - The index is built off to the side and published with a single
//!   `ArcSwapOption::store` before the state flips to `Ready` (release
//!   ordering), so any reader that observes `Ready` also observes the index.
//! - Corpus embedding runs with bounded concurrency; results are collected
//!   in record order, not completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::time::Duration;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, error, info, warn};

use birdsearch_domain::constants::{
    DEFAULT_EMBEDDING_CONCURRENCY, DEFAULT_EMBEDDING_TIMEOUT_SECS, EMBEDDING_LOG_PREVIEW_CHARS,
    INGESTION_PROGRESS_INTERVAL, MAX_TOP_K, MIN_TOP_K,
};
use birdsearch_domain::entities::BirdRecord;
use birdsearch_domain::error::{Error, Result};
use birdsearch_domain::ports::providers::{EmbeddingProvider, RecordSource};
use birdsearch_domain::value_objects::{Embedding, ReadinessState, SearchResult};

use crate::domain_services::VectorIndex;
use crate::ports::services::SearchServiceInterface;

/// Tuning knobs for the search service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchServiceConfig {
    /// Upper bound on a single embedding call
    pub embedding_timeout: Duration,
    /// Corpus embedding calls in flight at once (1 = sequential)
    pub embedding_concurrency: usize,
}

impl Default for SearchServiceConfig {
    fn default() -> Self {
        Self {
            embedding_timeout: Duration::from_secs(DEFAULT_EMBEDDING_TIMEOUT_SECS),
            embedding_concurrency: DEFAULT_EMBEDDING_CONCURRENCY,
        }
    }
}

/// Search service implementation
pub struct SearchServiceImpl {
    record_source: Arc<dyn RecordSource>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    config: SearchServiceConfig,
    state: AtomicU8,
    index: ArcSwapOption<VectorIndex>,
}

impl SearchServiceImpl {
    /// Create a new search service with default tuning
    pub fn new(
        record_source: Arc<dyn RecordSource>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self::with_config(
            record_source,
            embedding_provider,
            SearchServiceConfig::default(),
        )
    }

    /// Create a new search service with explicit tuning
    pub fn with_config(
        record_source: Arc<dyn RecordSource>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        config: SearchServiceConfig,
    ) -> Self {
        Self {
            record_source,
            embedding_provider,
            config,
            state: AtomicU8::new(ReadinessState::Uninitialized.as_u8()),
            index: ArcSwapOption::empty(),
        }
    }

    /// Claim the right to run ingestion
    ///
    /// Returns `None` when another caller is initializing or the service is
    /// already ready.
    fn try_begin_initialization(&self) -> Option<InitializationGuard<'_>> {
        let current = self.readiness();
        if !current.can_start_initialization() {
            return None;
        }
        self.state
            .compare_exchange(
                current.as_u8(),
                ReadinessState::Initializing.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .ok()
            .map(|_| InitializationGuard {
                state: &self.state,
                armed: true,
            })
    }

    /// Load, filter and embed the corpus, returning a finished index
    async fn build_index(&self) -> Result<VectorIndex> {
        let loaded = self.record_source.load_records().await.map_err(|e| match e {
            Error::Ingestion { .. } => e,
            other => Error::ingestion_with_source("Failed to load records", other),
        })?;

        let total = loaded.len();
        let records: Vec<BirdRecord> = loaded.into_iter().filter(BirdRecord::has_name).collect();
        if records.len() < total {
            debug!(
                dropped = total - records.len(),
                "Discarded records with a blank name"
            );
        }
        info!(
            count = records.len(),
            source = self.record_source.source_name(),
            "Loaded bird records"
        );

        let embeddings = self.embed_corpus(&records).await?;
        VectorIndex::build(records, embeddings)
    }

    /// Embed every record's searchable text, preserving record order
    async fn embed_corpus(&self, records: &[BirdRecord]) -> Result<Vec<Embedding>> {
        let total = records.len();
        let completed = AtomicUsize::new(0);
        let completed = &completed;
        // Owned texts keep the stream's futures free of higher-ranked borrows
        let texts: Vec<String> = records.iter().map(BirdRecord::searchable_text).collect();

        stream::iter(texts)
            .map(|text| async move {
                let embedding = self.embed_text(&text).await?;
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % INGESTION_PROGRESS_INTERVAL == 0 {
                    info!(done, total, "Generated embeddings for {done}/{total} birds");
                }
                Ok::<_, Error>(embedding)
            })
            .buffered(self.config.embedding_concurrency.max(1))
            .try_collect()
            .await
    }

    /// One embedding call bounded by the configured timeout
    async fn embed_text(&self, text: &str) -> Result<Embedding> {
        let timeout = self.config.embedding_timeout;
        match tokio::time::timeout(timeout, self.embedding_provider.embed(text)).await {
            Ok(Ok(embedding)) => {
                debug!(
                    text = %preview(text),
                    dimensions = embedding.dimensions,
                    "Generated embedding"
                );
                Ok(embedding)
            }
            Ok(Err(e)) => {
                error!(text = %preview(text), error = %e, "Error generating embedding");
                Err(match e {
                    Error::Embedding { .. } => e,
                    other => Error::embedding(other.to_string()),
                })
            }
            Err(_) => {
                error!(text = %preview(text), ?timeout, "Embedding request timed out");
                Err(Error::embedding(format!(
                    "Embedding request timed out after {timeout:?}"
                )))
            }
        }
    }
}

#[async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn initialize(&self) -> Result<()> {
        let Some(guard) = self.try_begin_initialization() else {
            info!(state = %self.readiness(), "Search service already initialized or initializing");
            return Ok(());
        };

        info!(
            embedding_provider = self.embedding_provider.provider_name(),
            concurrency = self.config.embedding_concurrency,
            "Initializing search service"
        );

        match self.build_index().await {
            Ok(index) => {
                let count = index.len();
                if index.is_empty() {
                    warn!("Record source yielded no records; searches will return nothing");
                }
                self.index.store(Some(Arc::new(index)));
                guard.complete();
                info!(count, "Search service initialized successfully");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error initializing search service");
                Err(e)
            }
        }
    }

    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(Error::invalid_argument("Query is required"));
        }
        if !(MIN_TOP_K..=MAX_TOP_K).contains(&top_k) {
            return Err(Error::invalid_argument(format!(
                "topK must be between {MIN_TOP_K} and {MAX_TOP_K}"
            )));
        }

        let state = self.readiness();
        let index = match self.index.load_full() {
            Some(index) if state.is_ready() => index,
            _ => {
                warn!(%state, "Search rejected, service not ready");
                return Err(Error::not_ready(format!("Search service is {state}")));
            }
        };

        info!(query, top_k, "Searching");

        let query_embedding = self
            .embed_text(query)
            .await
            .map_err(|e| Error::search_failed(format!("Failed to embed query '{query}'"), e))?;

        let ranked = index.rank(&query_embedding.vector, top_k).inspect_err(|e| {
            error!(query, error = %e, "Error ranking search results");
        })?;

        let results: Vec<SearchResult> = ranked
            .into_iter()
            .map(|r| SearchResult::from_record(r.record, r.score))
            .collect();

        info!(query, count = results.len(), "Search completed");
        Ok(results)
    }

    fn readiness(&self) -> ReadinessState {
        ReadinessState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn corpus_size(&self) -> usize {
        if !self.is_ready() {
            return 0;
        }
        self.index.load().as_ref().map_or(0, |index| index.len())
    }
}

/// Marks the service `Failed` unless ingestion completes
///
/// Covers both error returns and a cancelled initialization future.
struct InitializationGuard<'a> {
    state: &'a AtomicU8,
    armed: bool,
}

impl InitializationGuard<'_> {
    fn complete(mut self) {
        self.state
            .store(ReadinessState::Ready.as_u8(), Ordering::Release);
        self.armed = false;
    }
}

impl Drop for InitializationGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state
                .store(ReadinessState::Failed.as_u8(), Ordering::Release);
        }
    }
}

/// Leading characters of a text for log output
fn preview(text: &str) -> String {
    text.chars().take(EMBEDDING_LOG_PREVIEW_CHARS).collect()
}
