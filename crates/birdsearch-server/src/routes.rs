//! Rocket application assembly

use std::sync::Arc;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};

use birdsearch_application::ports::SearchServiceInterface;
use birdsearch_infrastructure::config::ServerConfig;

use crate::handlers::{health, liveness, search_get, search_post};
use crate::models::ErrorResponse;
use crate::state::ApiState;

/// Build the Rocket application around a search service
///
/// Routes:
/// - GET /search
/// - POST /search
/// - GET /health
/// - GET /healthz
pub fn build_rocket(search_service: Arc<dyn SearchServiceInterface>) -> Rocket<Build> {
    rocket::build()
        .manage(ApiState::new(search_service))
        .mount("/", routes![search_get, search_post, health::health, liveness])
        .register("/", catchers![json_catcher])
}

/// Rocket figment with the configured bind address
pub fn server_figment(config: &ServerConfig) -> rocket::figment::Figment {
    rocket::Config::figment()
        .merge(("address", config.host.clone()))
        .merge(("port", config.port))
}

/// Render Rocket's own errors (unknown route, unparseable body) as JSON
#[catch(default)]
fn json_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    (
        status,
        ErrorResponse::json(status.reason().unwrap_or("Request failed")),
    )
}
