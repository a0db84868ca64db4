// ============================================================================
// Bank API - Router
// File: crates/bank-api/src/router.rs
// ============================================================================

use async_graphql_axum::GraphQL;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use bank_shared::config::CorsSettings;
use bank_shared::constants::API_PREFIX;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::graphql::graphiql;
use crate::handlers::{clients, health, metrics, rights, transactions};
use crate::state::AppState;

pub fn create_router(state: AppState, cors: &CorsSettings) -> Router {
    let api_routes = Router::new()
        .route("/clients", get(clients::list_clients).post(clients::create_client))
        .route(
            "/clients/{id}",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route(
            "/clients/{id}/rights",
            get(rights::get_client_rights).put(rights::update_client_rights),
        )
        .route("/accounts/{id}/transactions", get(transactions::account_history));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/metrics", get(metrics::metrics))
        .route("/graphiql", get(graphiql))
        .route_service("/graphql", GraphQL::new(state.schema.clone()));

    Router::new()
        .merge(public_routes)
        .nest(API_PREFIX, api_routes)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
}
