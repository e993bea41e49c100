//! Flight finder endpoints.
//!
//! Input validation happens here; counting and persistence are delegated to
//! [`FlightFinderService`](crate::services::FlightFinderService).

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::info;

use super::validation::validate_input_string;
use super::{ApiError, AppState, CalculateRequest, CalculateResponse, SearchHistoryDto};

/// `POST /api/flight-finder/calculate`
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    let input = validate_input_string(request.input_string.as_deref())?;

    info!("Received calculate request: {}", input);

    let response = state.flight_finder().process_request(input).await?;
    Ok(Json(response))
}

/// `GET /api/flight-finder/history`
pub async fn history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchHistoryDto>>, ApiError> {
    info!("Received get history request");

    let history = state.flight_finder().search_history().await?;
    Ok(Json(history))
}
