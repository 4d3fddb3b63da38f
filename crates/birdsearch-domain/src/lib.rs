//! # Bird Semantic Search - Domain Layer
//!
//! Core types and contracts for the semantic search service. This crate has
//! no knowledge of HTTP, configuration files or concrete providers.
//!
//! ## Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | [`BirdRecord`] and its text projections |
//! | [`value_objects`] | [`Embedding`], [`SearchResult`], [`ReadinessState`] |
//! | [`ports`] | [`EmbeddingProvider`] and [`RecordSource`] contracts |
//! | [`error`] | [`Error`] taxonomy and [`Result`] alias |
//! | [`constants`] | Search limits and service identity |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{BirdRecord, Presence};
pub use error::{Error, Result};
pub use ports::providers::{EmbeddingProvider, RecordSource};
pub use value_objects::{Embedding, ReadinessState, SearchResult};
