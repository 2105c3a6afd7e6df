//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::debug;

use super::AppState;
use super::types::{ErrorResponse, EstimateResponse};
use crate::estimator::{EstimateInput, SavingsModel};
use crate::quote::{QuoteError, QuoteRequest};

/// Validates the request and runs the model.
///
/// `POST /estimate` → 200 + `EstimateResponse` JSON
/// non-positive or missing bill/size → 422 + `ErrorResponse`
pub async fn post_estimate(
    State(state): State<Arc<AppState>>,
    Json(input): Json<EstimateInput>,
) -> impl IntoResponse {
    if let Err(err) = input.validate() {
        debug!(%err, "estimate rejected");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(err)),
        ));
    }

    let result = state.model.estimate(&input);
    Ok(Json(EstimateResponse::new(input, result)))
}

/// Validates a quote request and acknowledges it. Nothing is stored.
///
/// `POST /quote` → 200 + `QuoteReceipt` JSON
/// missing fields or bad email → 422 + `ErrorResponse`
pub async fn post_quote(Json(request): Json<QuoteRequest>) -> impl IntoResponse {
    match request.submit() {
        Ok(receipt) => Ok(Json(receipt)),
        Err(err) => {
            debug!(%err, "quote rejected");
            let mut body = ErrorResponse::new(&err);
            if let QuoteError::MissingFields(fields) = err {
                body.missing_fields = fields;
            }
            Err((StatusCode::UNPROCESSABLE_ENTITY, Json(body)))
        }
    }
}

/// Returns the active savings model.
///
/// `GET /model` → 200 + `SavingsModel` JSON
pub async fn get_model(State(state): State<Arc<AppState>>) -> Json<SavingsModel> {
    Json(state.model.clone())
}
