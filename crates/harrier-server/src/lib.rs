//! HTTP layer for the harrier dashboard.
//!
//! Serves the single-page UI and a small JSON API with one endpoint per
//! scheduler view. Every API request runs the scheduler command fresh and
//! returns the parsed table; failures come back as JSON errors the page
//! shows inline.

pub mod error;
pub mod handlers;
pub mod ui;

use axum::Router;
use axum::routing::get;
use harrier_slurm::SlurmClient;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub client: SlurmClient,
    /// Externally visible path prefix, e.g. `/node/gpu01/7860` behind a
    /// proxy, or empty when served directly.
    pub root_path: String,
}

impl AppState {
    pub fn new(client: SlurmClient, root_path: String) -> Self {
        Self { client, root_path }
    }
}

/// Build the dashboard router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/jobs/running", get(handlers::running_jobs))
        .route("/api/jobs/history", get(handlers::history_jobs))
        .route("/api/cluster", get(handlers::cluster))
        .with_state(state)
}
