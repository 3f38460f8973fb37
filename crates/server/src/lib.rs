//! HTTP front end for pressbody.
//!
//! Exposes a single route, `GET /scrape?source_name=..&url=..`, returning
//! `{"content": "..."}` or a fixed `{"error": "..."}` payload.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use pressbody_core::{FetchConfig, Fetcher};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Shared per-process state. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(fetch_config: FetchConfig) -> pressbody_core::Result<Self> {
        Ok(Self { fetcher: Fetcher::new(fetch_config)? })
    }
}

/// Builds the router with CORS open to every origin.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/scrape", get(routes::scrape_handler))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
