//! Application Layer - Bird Semantic Search
//!
//! Implements the search core on top of the domain ports:
//!
//! - `domain_services::vector_index`: in-memory corpus with exhaustive
//!   cosine ranking
//! - `use_cases::search_service`: initialization lifecycle and query path
//! - `ports::services`: the contract the transport layer programs against
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `birdsearch-domain`: for entities, value objects and provider ports
//! - Pure Rust libraries for async, logging and lock-free publication

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
