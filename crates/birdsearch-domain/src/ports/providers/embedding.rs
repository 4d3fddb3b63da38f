use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Semantic Embedding Interface
///
/// Contract for services that turn text into fixed-length vectors. The
/// provider may be remote and slow; callers are expected to bound each call
/// with a timeout of their own.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()` unless a dedicated single-item path
/// exists.
///
/// # Example
///
/// ```ignore
/// let embedding = provider.embed("Indian Peafowl, scientific name Pavo cristatus").await?;
/// println!("dimensions: {}", embedding.dimensions);
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Identifier of this provider implementation (e.g. "azure_openai")
    fn provider_name(&self) -> &str;
}
