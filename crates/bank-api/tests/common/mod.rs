#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bank_api::{create_router, AppState};
use bank_infrastructure::{
    CachedClientRepository, InMemoryClientRepository, InMemoryRightsAdapter,
    InMemoryTransactionRepository,
};
use bank_shared::config::CorsSettings;
use bank_shared::constants::DEFAULT_CLIENT_RIGHTS;
use bank_shared::ClientMetrics;
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn state() -> AppState {
    AppState::new(
        Arc::new(CachedClientRepository::new(InMemoryClientRepository::new())),
        Arc::new(InMemoryTransactionRepository::new()),
        Arc::new(InMemoryRightsAdapter::new(DEFAULT_CLIENT_RIGHTS)),
        ClientMetrics::new("bank-test").unwrap(),
    )
}

pub fn app(state: AppState) -> Router {
    let cors = CorsSettings {
        allowed_origins: vec!["http://localhost:3000".to_string()],
    };
    create_router(state, &cors)
}

pub fn client_body(email: &str) -> Value {
    json!({
        "personalInformation": {
            "firstName": "Ana",
            "lastName": "Garcia",
            "documentId": "12345678Z",
            "documentType": "DNI",
            "dateOfBirth": "1988-04-12"
        },
        "address": {
            "street": "Gran Via 1",
            "city": "Madrid",
            "state": "Madrid",
            "country": "Spain",
            "postalCode": "28013"
        },
        "contactDetails": {
            "email": email,
            "phoneNumber": "+34600111222",
            "alternativePhoneNumber": ""
        },
        "clientType": "INDIVIDUAL"
    })
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn create_client(app: &Router, email: &str) -> String {
    let (status, body) = send(app, Method::POST, "/api/v1/clients", Some(client_body(email))).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_string()
}
