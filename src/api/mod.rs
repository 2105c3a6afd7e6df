//! REST API around the estimator and the quote form.
//!
//! Endpoints:
//! - `POST /estimate`: validate an estimate request and run the model
//! - `POST /quote`: validate a quote request and acknowledge it
//! - `GET /model`: the active savings model

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::estimator::SavingsModel;

pub use types::{ErrorResponse, EstimateResponse};

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`; nothing is mutated while
/// serving, so no locks are needed.
pub struct AppState {
    /// Savings model used for every estimate.
    pub model: SavingsModel,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/estimate", post(handlers::post_estimate))
        .route("/quote", post(handlers::post_quote))
        .route("/model", get(handlers::get_model))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
