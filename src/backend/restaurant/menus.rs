/**
 * Menu Handlers
 *
 * - GET    /menus
 * - GET    /menus/{menu_id}
 * - POST   /menus
 * - PATCH  /menus/{menu_id}   - dates move as a future, ordered pair
 * - DELETE /menus/{menu_id}
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::doc;

use super::{new_id, require_deleted, require_matched, Deleted};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::patch::timestamp;
use crate::backend::store::{self, InsertAck, MergePatch, UpdateAck};
use crate::shared::restaurant::{Menu, MenuUpdate, NewMenu};

const MENU_NOT_FOUND: &str = "menu not found";

pub async fn list_menus(State(state): State<AppState>) -> Result<Json<Vec<Menu>>, BackendError> {
    let menus = store::find_all(state.collections.menus.as_ref(), doc! {}).await?;
    Ok(Json(menus))
}

pub async fn get_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> Result<Json<Menu>, BackendError> {
    let menu = store::find_one(state.collections.menus.as_ref(), doc! { "menu_id": menu_id.as_str() })
        .await?
        .ok_or_else(|| BackendError::not_found(MENU_NOT_FOUND))?;
    Ok(Json(menu))
}

pub async fn create_menu(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<NewMenu>,
) -> Result<Json<InsertAck>, BackendError> {
    request.validate()?;

    let menu = request.into_record(new_id(), state.clock.now());
    let ack = store::insert_keyed(state.collections.menus.as_ref(), &menu.menu_id, &menu).await?;
    tracing::info!("Menu {} created by {}", menu.menu_id, user.user_id);
    Ok(Json(ack))
}

pub async fn update_menu(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(menu_id): Path<String>,
    JsonBody(update): JsonBody<MenuUpdate>,
) -> Result<Json<UpdateAck>, BackendError> {
    let now = state.clock.now();
    update.validate(now)?;

    let patch = MergePatch::new()
        .set_opt("name", update.name.map(|n| n.trim().to_string()))
        .set_opt("category", update.category)
        .set_opt("start_date", update.start_date.map(timestamp))
        .set_opt("end_date", update.end_date.map(timestamp))
        .touch(now);

    let ack = state
        .collections
        .menus
        .update_one(doc! { "menu_id": menu_id.as_str() }, patch, false)
        .await?;
    let ack = require_matched(ack, MENU_NOT_FOUND)?;
    tracing::info!("Menu {} updated by {}", menu_id, user.user_id);
    Ok(Json(ack))
}

pub async fn delete_menu(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(menu_id): Path<String>,
) -> Result<Json<Deleted>, BackendError> {
    let deleted = state
        .collections
        .menus
        .delete_one(doc! { "menu_id": menu_id.as_str() })
        .await?;
    require_deleted(deleted, MENU_NOT_FOUND)?;
    tracing::info!("Menu {} deleted by {}", menu_id, user.user_id);
    Ok(Json(Deleted::new("Menu")))
}
