//! HTTP surface of the dashboard
//!
//! Routes: `GET /` (server-rendered dashboard), `GET /api/estado`,
//! `GET /api/historial` and `GET /health`. Handlers translate service
//! results and errors into the JSON envelopes the front end consumes; the
//! service itself is injected through [`AppState`] so the same router runs
//! against the real backend client or a test double.

mod api;
mod health;
mod pages;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::service::TermostatoService;

/// Shared state available to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Domain service the handlers delegate to
    pub service: Arc<TermostatoService>,
    /// Backend base URL, reported by the health endpoint
    pub api_url: String,
}

/// Builds the application router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/api/estado", get(api::estado))
        .route("/api/historial", get(api::historial))
        .route("/health", get(health::health))
        .with_state(state)
}
