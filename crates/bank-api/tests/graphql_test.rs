mod common;

use async_graphql::{Request, Variables};
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::{app, send, state};

#[tokio::test]
async fn test_hello() {
    let state = state();
    let response = state.schema.execute("{ hello }").await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "hello": "Hello from GraphQL!" })
    );
}

#[tokio::test]
async fn test_get_client_rights_returns_defaults() {
    let state = state();
    let client_id = Uuid::new_v4().to_string();
    let query = r#"
        query($id: String!) {
            getClientRights(clientId: $id) { clientId rights }
        }
    "#;

    let response = state
        .schema
        .execute(Request::new(query).variables(Variables::from_json(json!({ "id": client_id }))))
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["getClientRights"]["clientId"], client_id.as_str());
    assert_eq!(
        data["getClientRights"]["rights"],
        json!(["MAKE_TRANSFER", "VIEW_ACCOUNT", "VIEW_STATEMENTS"])
    );
    assert_eq!(state.rights_service.cached_entries(), 1);
}

#[tokio::test]
async fn test_paginated_rights() {
    let state = state();
    let client_id = Uuid::new_v4().to_string();
    let query = format!(
        r#"{{ getClientRightsPaginated(clientId: "{}", pagination: {{ page: 1, size: 2 }}) {{
            rights page size totalElements totalPages hasNext hasPrevious
        }} }}"#,
        client_id
    );

    let response = state.schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let page = &response.data.into_json().unwrap()["getClientRightsPaginated"];
    assert_eq!(page["rights"], json!(["VIEW_STATEMENTS"]));
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["hasNext"], false);
    assert_eq!(page["hasPrevious"], true);
}

#[tokio::test]
async fn test_update_and_invalidate_mutations() {
    let state = state();
    let client_id = Uuid::new_v4().to_string();

    let update = format!(
        r#"mutation {{ updateClientRights(clientId: "{}", rights: ["VIEW_ACCOUNT"]) {{ clientId rights }} }}"#,
        client_id
    );
    let response = state.schema.execute(update).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap()["updateClientRights"]["rights"],
        json!(["VIEW_ACCOUNT"])
    );
    assert_eq!(state.rights_service.cached_entries(), 1);

    let invalidate = format!(
        r#"mutation {{ invalidateClientRightsCache(clientId: "{}") }}"#,
        client_id
    );
    let response = state.schema.execute(invalidate).await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "invalidateClientRightsCache": true })
    );
    assert_eq!(state.rights_service.cached_entries(), 0);

    let response = state
        .schema
        .execute("mutation { invalidateAllClientRightsCache }")
        .await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "invalidateAllClientRightsCache": true })
    );
}

#[tokio::test]
async fn test_invalid_client_id_is_an_error() {
    let state = state();
    let response = state
        .schema
        .execute(r#"{ getClientRights(clientId: "not-a-uuid") { rights } }"#)
        .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("Invalid client id"));
}

#[tokio::test]
async fn test_graphql_over_http() {
    let app = app(state());
    let (status, body) = send(&app, Method::POST, "/graphql", Some(json!({ "query": "{ hello }" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["hello"], "Hello from GraphQL!");

    let (status, _) = send(&app, Method::GET, "/graphiql", None).await;
    assert_eq!(status, StatusCode::OK);
}
