//! HTTP server for the BookWorld frontend.
//!
//! Serves the landing page template at `/`, the frontend assets under
//! `/static`, and a fixed health payload at `/api/health`, with
//! permissive CORS and request tracing on every response.

pub mod config;
pub mod error;
pub mod routes;
pub mod templates;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use templates::Templates;

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Builds state from configuration; templates reload on every request in debug mode.
    pub fn from_config(config: &Config) -> Self {
        Self {
            templates: Arc::new(Templates::new(&config.template_dir, config.debug)),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(routes::index::render))
        .route("/api/health", get(routes::health::check))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
