use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .metrics
        .render()
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}
