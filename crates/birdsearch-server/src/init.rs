//! Server Initialization
//!
//! Startup order:
//!
//! 1. Load and validate configuration
//! 2. Install logging
//! 3. Wire providers into the search service
//! 4. Spawn corpus initialization as a detached task
//! 5. Serve HTTP immediately; searches answer 503 until step 4 completes

use std::path::Path;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use birdsearch_application::ports::SearchServiceInterface;
use birdsearch_infrastructure::config::ConfigLoader;
use birdsearch_infrastructure::di::init_app;
use birdsearch_infrastructure::logging::{init_logging, log_config_loaded};

use crate::routes::{build_rocket, server_figment};

/// Run the bird semantic search server
///
/// Returns when Rocket shuts down (Ctrl+C) or fails to launch. A failed
/// corpus initialization does not stop the server; it is logged and the
/// service keeps answering 503.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config_file = loader.resolve_config_file()?;
    let config = loader.load()?;

    init_logging(&config.logging)?;
    log_config_loaded(config_file.as_deref());

    info!(
        host = %config.server.host,
        port = config.server.port,
        record_source = %config.record_source.provider,
        embedding_provider = %config.embedding.provider,
        "Starting bird semantic search API"
    );

    let app_context = init_app(config)?;
    let search_service = app_context.search_service();

    spawn_initialization(Arc::clone(&search_service));

    let rocket = build_rocket(search_service).configure(server_figment(&app_context.config.server));
    info!("Semantic search API started");
    rocket.launch().await?;

    info!("Semantic search API stopped");
    Ok(())
}

/// Load and embed the corpus on a detached task
///
/// Errors are logged, never propagated: the HTTP layer reports the failure
/// through readiness.
pub fn spawn_initialization(search_service: Arc<dyn SearchServiceInterface>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Initializing search service in background");
        match search_service.initialize().await {
            Ok(()) => info!(
                records = search_service.corpus_size(),
                "Search service initialization complete"
            ),
            Err(e) => error!(error = %e, "Failed to initialize search service"),
        }
    })
}
