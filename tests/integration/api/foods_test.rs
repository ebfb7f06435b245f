//! Food API integration tests
//!
//! CRUD plus the paginated listing.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_error;
use crate::common::{
    create_resource, create_unique_test_user, food_body, menu_body, spawn_app, with_token,
    TestApp, TestUser,
};

async fn app_with_menu() -> (TestApp, TestUser, String) {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;
    let menu_id = create_resource(&app.server, &user.token, "/menus", &menu_body("Dinner")).await;
    (app, user, menu_id)
}

async fn seed_foods(app: &TestApp, user: &TestUser, menu_id: &str, n: usize) {
    for i in 0..n {
        create_resource(
            &app.server,
            &user.token,
            "/foods",
            &food_body(&format!("Dish {:02}", i), 10.0 + i as f64, menu_id),
        )
        .await;
    }
}

fn names(body: &Value) -> Vec<String> {
    body["food_items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|f| f["food_name"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn dish_names(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("Dish {:02}", i)).collect()
}

#[tokio::test]
async fn test_list_without_params_returns_everything() {
    let (app, user, menu_id) = app_with_menu().await;
    seed_foods(&app, &user, &menu_id, 3).await;

    let response = with_token(app.server.get("/foods"), &user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total_count"], 3);
    assert_eq!(names(&body), dish_names(0..3));
}

#[tokio::test]
async fn test_second_page() {
    let (app, user, menu_id) = app_with_menu().await;
    seed_foods(&app, &user, &menu_id, 25).await;

    let response = with_token(app.server.get("/foods?page=2&page_size=10"), &user.token).await;
    let body: Value = response.json();
    assert_eq!(body["total_count"], 25);
    assert_eq!(names(&body), dish_names(10..20));

    let response = with_token(app.server.get("/foods?page=3&recordPerPage=10"), &user.token).await;
    let body: Value = response.json();
    assert_eq!(names(&body), dish_names(20..25));
}

#[tokio::test]
async fn test_start_index_overrides_page() {
    let (app, user, menu_id) = app_with_menu().await;
    seed_foods(&app, &user, &menu_id, 12).await;

    let response = with_token(
        app.server.get("/foods?page=2&page_size=3&start_index=5"),
        &user.token,
    )
    .await;
    let body: Value = response.json();
    assert_eq!(body["total_count"], 12);
    assert_eq!(names(&body), dish_names(5..8));

    let response = with_token(app.server.get("/foods?startIndex=-2"), &user.token).await;
    let body: Value = response.json();
    assert_eq!(names(&body), dish_names(10..12));
}

#[tokio::test]
async fn test_bad_params_fall_back_to_defaults() {
    let (app, user, menu_id) = app_with_menu().await;
    seed_foods(&app, &user, &menu_id, 11).await;

    let response = with_token(app.server.get("/foods?page=abc&page_size=-5"), &user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(names(&body), dish_names(0..10));
}

#[tokio::test]
async fn test_undecodable_query_falls_back_to_defaults() {
    let (app, user, menu_id) = app_with_menu().await;
    seed_foods(&app, &user, &menu_id, 11).await;

    for uri in ["/foods?page_size=3&recordPerPage=4", "/foods?page=1&page=2"] {
        let response = with_token(app.server.get(uri), &user.token).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{}", uri);
        let body: Value = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(body["total_count"], 11);
        assert_eq!(names(&body), dish_names(0..10));
    }
}

#[tokio::test]
async fn test_empty_collection_page() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = with_token(app.server.get("/foods"), &user.token).await;
    let body: Value = response.json();
    assert_eq!(body, json!({"total_count": 0, "food_items": []}));
}

#[tokio::test]
async fn test_create_requires_existing_menu() {
    let app = spawn_app();
    let user = create_unique_test_user(&app.server).await;

    let response = with_token(app.server.post("/foods"), &user.token)
        .json(&food_body("Ghost", 9.5, "65f0c0ffee0123456789abcd"))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "menu not found");
}

#[tokio::test]
async fn test_create_validates_fields() {
    let (app, user, menu_id) = app_with_menu().await;

    let response = with_token(app.server.post("/foods"), &user.token)
        .json(&food_body("X", 9.5, &menu_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = with_token(app.server.post("/foods"), &user.token)
        .json(&food_body("Soup", 0.0, &menu_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_food_lifecycle() {
    let (app, user, menu_id) = app_with_menu().await;
    let food_id = create_resource(
        &app.server,
        &user.token,
        "/foods",
        &food_body("Laksa", 14.567, &menu_id),
    )
    .await;

    let response = with_token(app.server.get(&format!("/foods/{}", food_id)), &user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let food: Value = response.json();
    assert_eq!(food["food_id"], food_id.as_str());
    assert_eq!(food["food_price"], 14.56);
    assert_eq!(food["menu_id"], menu_id.as_str());

    let response = with_token(app.server.patch(&format!("/foods/{}", food_id)), &user.token)
        .json(&json!({"food_price": 16.999}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let ack: Value = response.json();
    assert_eq!(ack["matched_count"], 1);
    assert_eq!(ack["modified_count"], 1);

    let food: Value = with_token(app.server.get(&format!("/foods/{}", food_id)), &user.token)
        .await
        .json();
    assert_eq!(food["food_price"], 16.99);
    assert_eq!(food["food_name"], "Laksa");

    let response = with_token(app.server.delete(&format!("/foods/{}", food_id)), &user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Food deleted successfully");

    let response = with_token(app.server.get(&format!("/foods/{}", food_id)), &user.token).await;
    assert_error!(response, StatusCode::NOT_FOUND, "food not found");
    let response = with_token(app.server.delete(&format!("/foods/{}", food_id)), &user.token).await;
    assert_error!(response, StatusCode::NOT_FOUND, "food not found");
}

#[tokio::test]
async fn test_update_missing_food_is_not_found() {
    let (app, user, _) = app_with_menu().await;
    let response = with_token(
        app.server.patch("/foods/65f0c0ffee0123456789abcd"),
        &user.token,
    )
    .json(&json!({"food_name": "Anything"}))
    .await;
    assert_error!(response, StatusCode::NOT_FOUND, "food not found");
}

#[tokio::test]
async fn test_update_to_unknown_menu_is_not_found() {
    let (app, user, menu_id) = app_with_menu().await;
    let food_id =
        create_resource(&app.server, &user.token, "/foods", &food_body("Pho", 11.0, &menu_id)).await;

    let response = with_token(app.server.patch(&format!("/foods/{}", food_id)), &user.token)
        .json(&json!({"menu_id": "000000000000000000000000"}))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "menu not found");
}
