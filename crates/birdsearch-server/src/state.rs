//! Rocket managed state

use std::sync::Arc;

use birdsearch_application::ports::SearchServiceInterface;

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    search_service: Arc<dyn SearchServiceInterface>,
}

impl ApiState {
    /// Wrap the search service for handlers
    pub fn new(search_service: Arc<dyn SearchServiceInterface>) -> Self {
        Self { search_service }
    }

    /// The search service backing every endpoint
    pub fn search_service(&self) -> &dyn SearchServiceInterface {
        self.search_service.as_ref()
    }
}
