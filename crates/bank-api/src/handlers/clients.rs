// ============================================================================
// Bank API - Client Handlers
// File: crates/bank-api/src/handlers/clients.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let clients = state.client_service.get_all_clients().await?;
    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, ApiError> {
    state
        .client_service
        .get_client_by_id(&id)
        .await?
        .map(|client| Json(ClientResponse::from(client)))
        .ok_or_else(|| ApiError::NotFound(format!("Client {} not found", id)))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(req): Json<CreateClientRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = req.into_client()?;
    let created = state.client_service.create_client(client).await?;
    Ok(Json(ClientResponse::from(created)))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    state
        .client_service
        .update_client(&id, req.into())
        .await?
        .map(|client| Json(ClientResponse::from(client)))
        .ok_or_else(|| ApiError::NotFound(format!("Client {} not found", id)))
}

/// Always 204, even for unknown ids
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.client_service.delete_client(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
