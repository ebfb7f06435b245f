/**
 * Food Handlers
 *
 * - GET    /foods              - paginated (`page`, `page_size`, `start_index`)
 * - GET    /foods/{food_id}
 * - POST   /foods              - menu must exist
 * - PATCH  /foods/{food_id}    - menu re-checked when changed
 * - DELETE /foods/{food_id}
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::doc;

use super::{ensure_exists, new_id, require_deleted, require_matched, Deleted};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, QueryOrDefault};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::{self, InsertAck, MergePatch, UpdateAck};
use crate::shared::pagination::{Page, PageQuery};
use crate::shared::restaurant::food::truncate_price;
use crate::shared::restaurant::{Food, FoodUpdate, NewFood};

pub const FOOD_ITEMS: &str = "food_items";

const FOOD_NOT_FOUND: &str = "food not found";
const MENU_NOT_FOUND: &str = "menu not found";

pub async fn list_foods(
    State(state): State<AppState>,
    QueryOrDefault(query): QueryOrDefault<PageQuery>,
) -> Result<Json<Page<Food>>, BackendError> {
    let window = query.window();
    tracing::debug!(
        "Listing foods from {} ({} per page)",
        window.start_index,
        window.page_size
    );
    let page = store::paginate(state.collections.foods.as_ref(), doc! {}, window, FOOD_ITEMS).await?;
    Ok(Json(page))
}

pub async fn get_food(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
) -> Result<Json<Food>, BackendError> {
    let food = store::find_one(state.collections.foods.as_ref(), doc! { "food_id": food_id.as_str() })
        .await?
        .ok_or_else(|| BackendError::not_found(FOOD_NOT_FOUND))?;
    Ok(Json(food))
}

pub async fn create_food(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<NewFood>,
) -> Result<Json<InsertAck>, BackendError> {
    request.validate()?;
    ensure_exists(
        state.collections.menus.as_ref(),
        "menu_id",
        &request.menu_id,
        MENU_NOT_FOUND,
    )
    .await?;

    let food = request.into_record(new_id(), state.clock.now());
    let ack = store::insert_keyed(state.collections.foods.as_ref(), &food.food_id, &food).await?;
    tracing::info!("Food {} created by {}", food.food_id, user.user_id);
    Ok(Json(ack))
}

pub async fn update_food(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(food_id): Path<String>,
    JsonBody(update): JsonBody<FoodUpdate>,
) -> Result<Json<UpdateAck>, BackendError> {
    update.validate()?;
    if let Some(menu_id) = &update.menu_id {
        ensure_exists(state.collections.menus.as_ref(), "menu_id", menu_id, MENU_NOT_FOUND).await?;
    }

    let patch = MergePatch::new()
        .set_opt("food_name", update.food_name.map(|n| n.trim().to_string()))
        .set_opt("food_price", update.food_price.map(truncate_price))
        .set_opt("food_description", update.food_description)
        .set_opt("food_image", update.food_image)
        .set_opt("menu_id", update.menu_id)
        .touch(state.clock.now());

    let ack = state
        .collections
        .foods
        .update_one(doc! { "food_id": food_id.as_str() }, patch, false)
        .await?;
    let ack = require_matched(ack, FOOD_NOT_FOUND)?;
    tracing::info!("Food {} updated by {}", food_id, user.user_id);
    Ok(Json(ack))
}

pub async fn delete_food(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(food_id): Path<String>,
) -> Result<Json<Deleted>, BackendError> {
    let deleted = state
        .collections
        .foods
        .delete_one(doc! { "food_id": food_id.as_str() })
        .await?;
    require_deleted(deleted, FOOD_NOT_FOUND)?;
    tracing::info!("Food {} deleted by {}", food_id, user.user_id);
    Ok(Json(Deleted::new("Food")))
}
