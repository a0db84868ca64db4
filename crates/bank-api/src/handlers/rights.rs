use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use bank_core::domain::RightsSet;
use bank_core::services::paginate_rights;
use uuid::Uuid;

use crate::dto::{PagedClientRightsDto, RightsQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// Plain set, or an alphabetical page when `page` or `size` is given
pub async fn get_client_rights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RightsQuery>,
) -> Result<Response, ApiError> {
    let rights = state
        .client_service
        .get_client_rights(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Client {} not found", id)))?;

    if !query.is_paged() {
        return Ok(Json(rights).into_response());
    }

    let page = paginate_rights(&rights, query.page_request())?;
    Ok(Json(PagedClientRightsDto::from(page)).into_response())
}

pub async fn update_client_rights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(rights): Json<RightsSet>,
) -> Result<Json<RightsSet>, ApiError> {
    if !state.client_service.client_exists(&id).await? {
        return Err(ApiError::NotFound(format!("Client {} not found", id)));
    }

    let updated = state.client_service.update_client_rights(&id, rights).await?;
    Ok(Json(updated))
}
