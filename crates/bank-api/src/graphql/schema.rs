// ============================================================================
// Bank API - GraphQL Schema
// File: crates/bank-api/src/graphql/schema.rs
// Description: Rights queries and cache mutations, plus the GraphiQL page
// ============================================================================

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use axum::response::{Html, IntoResponse};
use bank_core::services::{paginate_rights, RightsService};
use uuid::Uuid;

use super::types::{ClientRightsType, PagedClientRightsType, PaginationInput};

pub type BankSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(rights_service: Arc<RightsService>) -> BankSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(rights_service)
        .finish()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

fn rights_service<'a>(ctx: &'a Context<'_>) -> Result<&'a Arc<RightsService>> {
    ctx.data::<Arc<RightsService>>()
}

fn parse_client_id(client_id: &str) -> Result<Uuid> {
    Uuid::parse_str(client_id).map_err(|_| format!("Invalid client id: {}", client_id).into())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> &'static str {
        "Hello from GraphQL!"
    }

    async fn get_client_rights(
        &self,
        ctx: &Context<'_>,
        client_id: String,
    ) -> Result<ClientRightsType> {
        let id = parse_client_id(&client_id)?;
        let rights = rights_service(ctx)?.get_client_rights(&id).await?;
        Ok(ClientRightsType::new(client_id, rights))
    }

    async fn get_client_rights_paginated(
        &self,
        ctx: &Context<'_>,
        client_id: String,
        pagination: Option<PaginationInput>,
    ) -> Result<PagedClientRightsType> {
        let id = parse_client_id(&client_id)?;
        let request = pagination.unwrap_or_default().to_page_request()?;
        let rights = rights_service(ctx)?.get_client_rights(&id).await?;
        let page = paginate_rights(&rights, request)?;
        Ok(page.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn update_client_rights(
        &self,
        ctx: &Context<'_>,
        client_id: String,
        rights: Vec<String>,
    ) -> Result<ClientRightsType> {
        let id = parse_client_id(&client_id)?;
        let updated = rights_service(ctx)?
            .update_client_rights(&id, rights.into_iter().collect())
            .await?;
        Ok(ClientRightsType::new(client_id, updated))
    }

    async fn invalidate_client_rights_cache(
        &self,
        ctx: &Context<'_>,
        client_id: String,
    ) -> Result<bool> {
        let id = parse_client_id(&client_id)?;
        rights_service(ctx)?.invalidate_client_rights_cache(&id);
        Ok(true)
    }

    async fn invalidate_all_client_rights_cache(&self, ctx: &Context<'_>) -> Result<bool> {
        rights_service(ctx)?.invalidate_all_client_rights_cache();
        Ok(true)
    }
}
