//! Authentication API integration tests
//!
//! Signup and login, including the conflict and credential failure bodies.

use std::future::IntoFuture;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use resto_api::backend::auth::users::get_user_by_email;
use serde_json::{json, Value};

use crate::common::{create_test_user, signup_body, spawn_app, with_token, TEST_PASSWORD};
use crate::{assert_contains, assert_error, assert_ok};

#[tokio::test]
async fn test_signup_success() {
    let app = spawn_app();

    let response = app
        .server
        .post("/users/signup")
        .json(&signup_body("chef@example.com", "555-0100"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["inserted_id"].as_str().map(str::len), Some(24));

    let users = app.state.collections.users.as_ref();
    let user = assert_ok!(get_user_by_email(users, "chef@example.com").await).unwrap();
    assert_ne!(user.password, TEST_PASSWORD);
    assert!(user.password.starts_with("$2"));
    let token = user.token.expect("signup stores an access token");
    assert!(user.refresh_token.is_some());

    let claims = assert_ok!(app.state.tokens.validate(&token));
    assert_eq!(claims.user_id, user.user_id);
    assert_eq!(claims.email, "chef@example.com");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = spawn_app();
    let first = app
        .server
        .post("/users/signup")
        .json(&signup_body("chef@example.com", "555-0100"))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let response = app
        .server
        .post("/users/signup")
        .json(&signup_body("chef@example.com", "555-0199"))
        .await;
    assert_error!(response, StatusCode::CONFLICT, "Email already exists");
}

#[tokio::test]
async fn test_signup_duplicate_phone() {
    let app = spawn_app();
    app.server
        .post("/users/signup")
        .json(&signup_body("chef@example.com", "555-0100"))
        .await;

    let response = app
        .server
        .post("/users/signup")
        .json(&signup_body("sous@example.com", "555-0100"))
        .await;
    assert_error!(response, StatusCode::CONFLICT, "Phone number already exists");
}

#[tokio::test]
async fn test_signup_rejects_bad_input() {
    let app = spawn_app();

    let response = app
        .server
        .post("/users/signup")
        .json(&signup_body("not-an-email", "555-0100"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_contains!(body["error"].as_str().unwrap_or_default(), "email");

    let mut body = signup_body("chef@example.com", "555-0100");
    body["role"] = json!("owner");
    let response = app.server.post("/users/signup").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post("/users/signup")
        .content_type("application/json")
        .bytes("{ not json".into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_rotates_tokens() {
    let app = spawn_app();
    app.server
        .post("/users/signup")
        .json(&signup_body("chef@example.com", "555-0100"))
        .await;

    app.clock.advance(chrono::Duration::seconds(5));
    let response = app
        .server
        .post("/users/login")
        .json(&json!({"email": "chef@example.com", "password": TEST_PASSWORD}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body.get("password").is_none());
    assert_eq!(body["email"], "chef@example.com");
    assert_eq!(body["role"], "user");

    let token = body["token"].as_str().unwrap_or_default();
    let claims = assert_ok!(app.state.tokens.validate(token));
    assert_eq!(claims.first_name, "Test");
    assert_eq!(claims.last_name, "Cook");

    let users = app.state.collections.users.as_ref();
    let stored = assert_ok!(get_user_by_email(users, "chef@example.com").await).unwrap();
    assert_eq!(stored.token.as_deref(), Some(token));
    assert_eq!(stored.refresh_token.as_deref(), body["refresh_token"].as_str());
}

#[tokio::test]
async fn test_login_failures_share_one_body() {
    let app = spawn_app();
    create_test_user(&app.server, "chef@example.com", "555-0100").await;

    let wrong_password = app
        .server
        .post("/users/login")
        .json(&json!({"email": "chef@example.com", "password": "nope-nope"}))
        .await;
    let unknown_email = app
        .server
        .post("/users/login")
        .json(&json!({"email": "ghost@example.com", "password": TEST_PASSWORD}))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    let a: Value = wrong_password.json();
    let b: Value = unknown_email.json();
    assert_eq!(a, b);
    assert_eq!(a["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_requires_email_format() {
    let app = spawn_app();
    let response = app
        .server
        .post("/users/login")
        .json(&json!({"email": "chef", "password": TEST_PASSWORD}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_lookup_omits_password() {
    let app = spawn_app();
    let chef = create_test_user(&app.server, "chef@example.com", "555-0100").await;
    create_test_user(&app.server, "sous@example.com", "555-0101").await;

    let users: Vec<Value> = with_token(app.server.get("/users"), &chef.token).await.json();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password").is_none()));

    let response = with_token(app.server.get(&format!("/users/{}", chef.user_id)), &chef.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let user: Value = response.json();
    assert_eq!(user["email"], "chef@example.com");
    assert!(user.get("password").is_none());

    let response = with_token(
        app.server.get("/users/000000000000000000000000"),
        &chef.token,
    )
    .await;
    assert_error!(response, StatusCode::NOT_FOUND, "user not found");
}

#[tokio::test]
async fn test_concurrent_signups_with_same_email() {
    let app = spawn_app();
    let first = app
        .server
        .post("/users/signup")
        .json(&signup_body("race@example.com", "555-0200"));
    let second = app
        .server
        .post("/users/signup")
        .json(&signup_body("race@example.com", "555-0201"));

    let (a, b) = tokio::join!(first.into_future(), second.into_future());

    let mut statuses = vec![a.status_code(), b.status_code()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CONFLICT]);

    let loser = if a.status_code() == StatusCode::CONFLICT { a } else { b };
    let body: Value = loser.json();
    assert_eq!(body["error"], "Email already exists");

    let stored = get_user_by_email(app.state.collections.users.as_ref(), "race@example.com")
        .await
        .unwrap();
    assert!(stored.is_some());
}
