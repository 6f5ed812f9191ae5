//! notecraft-server
//!
//! HTTP surface for the note form: format detection, instruction preview,
//! the three Bedrock note workflows, and approved-note persistence.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the router with all routes, request logging and CORS applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/detect", post(routes::format::detect))
        .route("/instruction", post(routes::format::instruction))
        .route("/notes/generate", post(routes::notes::generate))
        .route("/notes/convert", post(routes::notes::convert))
        .route("/notes/progress", post(routes::notes::progress))
        .route("/notes/approve", post(routes::approved::approve))
        .route("/notes/approved", get(routes::approved::list_approved))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
