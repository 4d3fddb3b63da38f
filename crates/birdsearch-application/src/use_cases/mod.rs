//! Use Case Implementations

/// Search service use case
pub mod search_service;

pub use search_service::{SearchServiceConfig, SearchServiceImpl};
