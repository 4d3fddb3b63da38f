//! Null embedding provider for testing and development
//!
//! Produces deterministic bag-of-words embeddings without any external
//! service. Each lowercase word is hashed into one of a fixed number of
//! buckets, so texts sharing words score as similar.

use async_trait::async_trait;

use birdsearch_domain::error::Result;
use birdsearch_domain::ports::providers::EmbeddingProvider;
use birdsearch_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider
///
/// # Example
///
/// ```rust
/// use birdsearch_providers::embedding::NullEmbeddingProvider;
/// use birdsearch_domain::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider producing vectors of the given length (at least 1)
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Length of produced vectors
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimensions];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let bucket = fnv1a(&word.to_lowercase()) % self.dimensions as u64;
            // bucket < dimensions, so the cast is lossless
            #[allow(clippy::cast_possible_truncation)]
            let bucket = bucket as usize;
            vector[bucket] += 1.0;
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// 64-bit FNV-1a, stable across runs and platforms
fn fnv1a(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.vector_for(text), "null"))
            .collect())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
