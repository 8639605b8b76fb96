//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::types::Quran;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
///
/// `/ping` and `/random` are static routes and win over `/:surah_number`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/random", get(handlers::random_ayah))
        .route("/:surah_number", get(handlers::get_surah))
        .route("/:surah_number/:ayah_number", get(handlers::get_ayah))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Convenience helper wrapping an already loaded dataset
pub fn create_router_for(quran: Arc<Quran>) -> Router {
    create_router(AppState::new(quran))
}
