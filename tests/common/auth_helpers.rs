//! Authentication test helpers
//!
//! Provides utilities for creating test users, logging them in and sending
//! authenticated requests.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestServer};
use serde_json::{json, Value};

pub const TEST_PASSWORD: &str = "test_password_123";

/// Test user credentials
pub struct TestUser {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub token: String,
    pub refresh_token: String,
}

pub fn signup_body(email: &str, phone: &str) -> Value {
    json!({
        "first_name": "Test",
        "last_name": "Cook",
        "password": TEST_PASSWORD,
        "email": email,
        "phone": phone,
        "role": "user",
    })
}

/// Sign up and log in a user, returning its fresh tokens
pub async fn create_test_user(server: &TestServer, email: &str, phone: &str) -> TestUser {
    let response = server.post("/users/signup").json(&signup_body(email, phone)).await;
    assert_eq!(response.status_code(), StatusCode::OK, "signup failed: {}", response.text());

    let response = server
        .post("/users/login")
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed: {}", response.text());
    let body: Value = response.json();

    TestUser {
        user_id: body["user_id"].as_str().unwrap_or_default().to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        token: body["token"].as_str().unwrap_or_default().to_string(),
        refresh_token: body["refresh_token"].as_str().unwrap_or_default().to_string(),
    }
}

/// A logged-in user with a unique email and phone
pub async fn create_unique_test_user(server: &TestServer) -> TestUser {
    let suffix = mongodb::bson::oid::ObjectId::new().to_hex();
    create_test_user(
        server,
        &format!("cook_{}@example.com", suffix),
        &format!("555-{}", suffix),
    )
    .await
}

/// Attach the `token` header
pub fn with_token(request: TestRequest, token: &str) -> TestRequest {
    request.add_header(
        HeaderName::from_static("token"),
        HeaderValue::from_str(token).expect("token is a valid header value"),
    )
}

/// POST `body` to `path` as `token` and return the `inserted_id`
pub async fn create_resource(server: &TestServer, token: &str, path: &str, body: &Value) -> String {
    let response = with_token(server.post(path), token).json(body).await;
    assert_eq!(response.status_code(), StatusCode::OK, "create failed: {}", response.text());
    let ack: Value = response.json();
    ack["inserted_id"].as_str().unwrap_or_default().to_string()
}

pub fn menu_body(name: &str) -> Value {
    let start = chrono::Utc::now() + chrono::Duration::days(1);
    let end = start + chrono::Duration::days(30);
    json!({
        "name": name,
        "category": "dinner",
        "start_date": start,
        "end_date": end,
    })
}

pub fn food_body(name: &str, price: f64, menu_id: &str) -> Value {
    json!({
        "food_name": name,
        "food_price": price,
        "food_description": format!("{} of the day", name),
        "food_image": "https://img.example.com/dish.png",
        "menu_id": menu_id,
    })
}
