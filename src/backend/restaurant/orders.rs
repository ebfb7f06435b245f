/**
 * Order Handlers
 *
 * - GET    /orders
 * - GET    /orders/{order_id}
 * - POST   /orders              - table must exist
 * - PATCH  /orders/{order_id}   - table re-checked when changed
 * - DELETE /orders/{order_id}
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::doc;

use super::{ensure_exists, new_id, require_deleted, require_matched, Deleted};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::{self, InsertAck, MergePatch, UpdateAck};
use crate::shared::restaurant::{NewOrder, Order, OrderUpdate};

pub(crate) const ORDER_NOT_FOUND: &str = "order not found";
const TABLE_NOT_FOUND: &str = "table not found";

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, BackendError> {
    let orders = store::find_all(state.collections.orders.as_ref(), doc! {}).await?;
    Ok(Json(orders))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, BackendError> {
    let order = store::find_one(state.collections.orders.as_ref(), doc! { "order_id": order_id.as_str() })
        .await?
        .ok_or_else(|| BackendError::not_found(ORDER_NOT_FOUND))?;
    Ok(Json(order))
}

pub async fn create_order(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<NewOrder>,
) -> Result<Json<InsertAck>, BackendError> {
    request.validate()?;
    ensure_exists(
        state.collections.tables.as_ref(),
        "table_id",
        &request.table_id,
        TABLE_NOT_FOUND,
    )
    .await?;

    let order = request.into_record(new_id(), state.clock.now());
    let ack = store::insert_keyed(
        state.collections.orders.as_ref(),
        &order.order_id,
        &order,
    )
    .await?;
    tracing::info!("Order {} created by {}", order.order_id, user.user_id);
    Ok(Json(ack))
}

pub async fn update_order(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(order_id): Path<String>,
    JsonBody(update): JsonBody<OrderUpdate>,
) -> Result<Json<UpdateAck>, BackendError> {
    update.validate()?;
    if let Some(table_id) = &update.table_id {
        ensure_exists(state.collections.tables.as_ref(), "table_id", table_id, TABLE_NOT_FOUND).await?;
    }

    let patch = MergePatch::new()
        .set_opt("table_id", update.table_id)
        .set_opt("order_status", update.order_status)
        .touch(state.clock.now());

    let ack = state
        .collections
        .orders
        .update_one(doc! { "order_id": order_id.as_str() }, patch, false)
        .await?;
    let ack = require_matched(ack, ORDER_NOT_FOUND)?;
    tracing::info!("Order {} updated by {}", order_id, user.user_id);
    Ok(Json(ack))
}

pub async fn delete_order(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(order_id): Path<String>,
) -> Result<Json<Deleted>, BackendError> {
    let deleted = state
        .collections
        .orders
        .delete_one(doc! { "order_id": order_id.as_str() })
        .await?;
    require_deleted(deleted, ORDER_NOT_FOUND)?;
    tracing::info!("Order {} deleted by {}", order_id, user.user_id);
    Ok(Json(Deleted::new("Order")))
}
