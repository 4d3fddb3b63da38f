//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for semantic search.
//!
//! ## Available Providers
//!
//! | Provider | Type | Feature |
//! |----------|------|---------|
//! | AzureOpenAIEmbeddingProvider | Cloud | `embedding-azure-openai` |
//! | OpenAIEmbeddingProvider | Cloud | `embedding-openai` |
//! | NullEmbeddingProvider | Offline | always |
//!
//! ## Provider Selection Guide
//!
//! - **Production**: Azure OpenAI with an embedding deployment
//! - **Alternative cloud**: OpenAI or any compatible `/embeddings` server
//! - **Development/Testing**: `NullEmbeddingProvider`, deterministic and offline

#[cfg(feature = "embedding-azure-openai")]
pub mod azure_openai;
pub mod helpers;
pub mod null;
#[cfg(feature = "embedding-openai")]
pub mod openai;

#[cfg(feature = "embedding-azure-openai")]
pub use azure_openai::AzureOpenAIEmbeddingProvider;
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
