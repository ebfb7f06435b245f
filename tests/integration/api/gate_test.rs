//! Token gate integration tests

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use axum_test::TestServer;
use chrono::Duration;
use pretty_assertions::assert_eq;
use resto_api::backend::auth::sessions::ACCESS_TOKEN_TTL;
use resto_api::backend::auth::{Clock, FixedClock, Identity, TokenService};
use resto_api::backend::middleware::{auth_gate, AuthUser, TOKEN_HEADER};
use resto_api::backend::store::MemoryCollection;
use secrecy::SecretString;
use serde_json::{json, Value};

use crate::assert_error;
use crate::common::{create_unique_test_user, spawn_app, with_token};

#[tokio::test]
async fn test_missing_header_is_forbidden() {
    let app = spawn_app();
    let response = app.server.get("/foods").await;
    assert_error!(response, StatusCode::FORBIDDEN, "No Authorization header provided");
}

#[tokio::test]
async fn test_empty_header_is_forbidden() {
    let app = spawn_app();
    let response = with_token(app.server.get("/foods"), "").await;
    assert_error!(response, StatusCode::FORBIDDEN, "No Authorization header provided");
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = spawn_app();
    let response = with_token(app.server.get("/foods"), "garbage.token.value").await;
    assert_error!(response, StatusCode::FORBIDDEN, "Invalid token");
}

#[tokio::test]
async fn test_foreign_signature_is_forbidden() {
    let app = spawn_app();
    let foreign = TokenService::new(
        &SecretString::from("someone-else".to_string()),
        Arc::new(FixedClock::new(app.clock.now())),
        Arc::new(MemoryCollection::new("user")),
    );
    let pair = foreign
        .issue(&Identity {
            email: "x@example.com".to_string(),
            first_name: "X".to_string(),
            last_name: "Y".to_string(),
            user_id: "65f0c0ffee0123456789abcd".to_string(),
        })
        .unwrap();

    let response = with_token(app.server.get("/foods"), &pair.token).await;
    assert_error!(response, StatusCode::FORBIDDEN, "Invalid token");
}

#[tokio::test]
async fn test_fresh_token_passes_and_expired_token_fails() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = with_token(app.server.get("/foods"), &user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    app.clock.advance(ACCESS_TOKEN_TTL + Duration::seconds(1));
    let response = with_token(app.server.get("/foods"), &user.token).await;
    assert_error!(response, StatusCode::FORBIDDEN, "Invalid token");
}

async fn whoami(AuthUser(user): AuthUser) -> Json<Value> {
    Json(json!({
        "user_id": user.user_id,
        "email": user.email,
        "first_name": user.first_name,
        "last_name": user.last_name,
    }))
}

#[tokio::test]
async fn test_gate_injects_claims_identity() {
    let clock = Arc::new(FixedClock::new(chrono::Utc::now()));
    let tokens = Arc::new(TokenService::new(
        &SecretString::from("gate-secret".to_string()),
        clock,
        Arc::new(MemoryCollection::new("user")),
    ));
    let router = Router::new()
        .route("/whoami", get(whoami))
        .route_layer(from_fn_with_state(tokens.clone(), auth_gate));
    let server = TestServer::new(router).unwrap();

    let identity = Identity {
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        user_id: "65f0c0ffee0123456789abcd".to_string(),
    };
    let pair = tokens.issue(&identity).unwrap();
    let claims = tokens.validate(&pair.token).unwrap();

    let response = server
        .get("/whoami")
        .add_header(
            HeaderName::from_static(TOKEN_HEADER),
            HeaderValue::from_str(&pair.token).unwrap(),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "user_id": claims.user_id,
            "email": claims.email,
            "first_name": claims.first_name,
            "last_name": claims.last_name,
        })
    );
    assert_eq!(body["email"], identity.email.as_str());

    let response = server.get("/whoami").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_user_routes_behind_gate() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = with_token(app.server.get("/users"), &user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let users: Vec<Value> = response.json();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("password").is_none());

    let response = with_token(
        app.server.get(&format!("/users/{}", user.user_id)),
        &user.token,
    )
    .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], user.email.as_str());
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = with_token(
        app.server.get("/users/000000000000000000000000"),
        &user.token,
    )
    .await;
    assert_error!(response, StatusCode::NOT_FOUND, "user not found");
}

#[tokio::test]
async fn test_account_routes_are_public() {
    let app = spawn_app();
    let response = app
        .server
        .post("/users/login")
        .json(&serde_json::json!({"email": "nobody@example.com", "password": "whatever"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
