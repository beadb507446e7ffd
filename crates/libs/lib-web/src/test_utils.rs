//! Shared fixtures for handler and middleware tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use lib_auth::TokenManager;
use lib_core::model::store::test_support::setup_test_db;
use lib_core::{Config, DbPool, SqliteStore};
use tower::ServiceExt;

use crate::server::{create_router, AppState};
use crate::services::CompanyService;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        access_token_ttl_secs: 120,
        shutdown_timeout_secs: 1,
    }
}

pub fn test_state(pool: DbPool) -> AppState {
    let config = test_config();
    let tokens = TokenManager::new(&config.jwt_secret, config.access_token_ttl_secs)
        .expect("Token manager should accept the test secret");
    AppState {
        service: Arc::new(CompanyService::new(
            Arc::new(SqliteStore::new(pool)),
            tokens,
        )),
    }
}

/// The full router over a fresh in-memory database.
pub async fn test_app() -> Router {
    create_router(test_state(setup_test_db().await))
}

/// A bearer token for user `1`, signed with [`TEST_SECRET`].
pub fn bearer() -> String {
    let tokens = TokenManager::new(TEST_SECRET, 120).expect("valid test secret");
    format!("Bearer {}", tokens.create_token("1").expect("token"))
}

pub fn company_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Big company",
        "description": "description",
        "amountOfEmployees": 100,
        "registered": false,
        "type": "Corporations"
    })
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    let mut req = json_request(method, uri, body);
    req.headers_mut()
        .insert("authorization", bearer().parse().unwrap());
    req
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
