//! # Bird Semantic Search - Provider Implementations
//!
//! This crate contains the user-selectable implementations of the ports
//! defined in `birdsearch-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Azure OpenAI, OpenAI, Null |
//! | Corpus | `RecordSource` | Blob (HTTP), File |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! birdsearch-providers = { version = "0.1", default-features = false, features = ["embedding-azure-openai"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use birdsearch_providers::embedding::AzureOpenAIEmbeddingProvider;
//! use birdsearch_providers::record_source::BlobRecordSource;
//! ```

pub use birdsearch_domain::error::{Error, Result};
pub use birdsearch_domain::ports::providers::{EmbeddingProvider, RecordSource};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for the supported embedding APIs.
pub mod embedding;

/// Record source implementations
///
/// Implements `RecordSource` for the supported corpus locations.
pub mod record_source;
