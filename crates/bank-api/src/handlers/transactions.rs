use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::dto::TransactionResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Ledger of one account, newest first
pub async fn account_history(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let history = state.transaction_service.history(&account_id).await?;
    Ok(Json(history.into_iter().map(TransactionResponse::from).collect()))
}
