/**
 * Order Item Handlers
 *
 * - GET    /order_items                  - paginated
 * - GET    /orderItems-order/{order_id}  - paginated, items of one order
 * - GET    /order_items/{order_item_id}
 * - POST   /order_items                  - order must exist
 * - PATCH  /order_items/{order_item_id}
 * - DELETE /order_items/{order_item_id}
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::doc;

use super::orders::ORDER_NOT_FOUND;
use super::{ensure_exists, new_id, require_deleted, require_matched, Deleted};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, QueryOrDefault};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::{self, InsertAck, MergePatch, UpdateAck};
use crate::shared::pagination::{Page, PageQuery};
use crate::shared::restaurant::{NewOrderItem, OrderItem, OrderItemUpdate};

pub const ORDER_ITEMS: &str = "order_items";

const ORDER_ITEM_NOT_FOUND: &str = "order item not found";

pub async fn list_order_items(
    State(state): State<AppState>,
    QueryOrDefault(query): QueryOrDefault<PageQuery>,
) -> Result<Json<Page<OrderItem>>, BackendError> {
    let page = store::paginate(
        state.collections.order_items.as_ref(),
        doc! {},
        query.window(),
        ORDER_ITEMS,
    )
    .await?;
    Ok(Json(page))
}

pub async fn list_order_items_by_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    QueryOrDefault(query): QueryOrDefault<PageQuery>,
) -> Result<Json<Page<OrderItem>>, BackendError> {
    let page = store::paginate(
        state.collections.order_items.as_ref(),
        doc! { "order_id": order_id.as_str() },
        query.window(),
        ORDER_ITEMS,
    )
    .await?;
    Ok(Json(page))
}

pub async fn get_order_item(
    State(state): State<AppState>,
    Path(order_item_id): Path<String>,
) -> Result<Json<OrderItem>, BackendError> {
    let item = store::find_one(
        state.collections.order_items.as_ref(),
        doc! { "order_item_id": order_item_id.as_str() },
    )
    .await?
    .ok_or_else(|| BackendError::not_found(ORDER_ITEM_NOT_FOUND))?;
    Ok(Json(item))
}

pub async fn create_order_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<NewOrderItem>,
) -> Result<Json<InsertAck>, BackendError> {
    request.validate()?;
    ensure_exists(
        state.collections.orders.as_ref(),
        "order_id",
        &request.order_id,
        ORDER_NOT_FOUND,
    )
    .await?;

    let item = request.into_record(new_id(), state.clock.now());
    let ack = store::insert_keyed(
        state.collections.order_items.as_ref(),
        &item.order_item_id,
        &item,
    )
    .await?;
    tracing::info!(
        "Order item {} added to order {} by {}",
        item.order_item_id,
        item.order_id,
        user.user_id
    );
    Ok(Json(ack))
}

pub async fn update_order_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(order_item_id): Path<String>,
    JsonBody(update): JsonBody<OrderItemUpdate>,
) -> Result<Json<UpdateAck>, BackendError> {
    update.validate()?;

    let patch = MergePatch::new()
        .set_opt("quantity", update.quantity)
        .set_opt("price", update.price)
        .set_opt("food_id", update.food_id)
        .touch(state.clock.now());

    let ack = state
        .collections
        .order_items
        .update_one(doc! { "order_item_id": order_item_id.as_str() }, patch, false)
        .await?;
    let ack = require_matched(ack, ORDER_ITEM_NOT_FOUND)?;
    tracing::info!("Order item {} updated by {}", order_item_id, user.user_id);
    Ok(Json(ack))
}

pub async fn delete_order_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(order_item_id): Path<String>,
) -> Result<Json<Deleted>, BackendError> {
    let deleted = state
        .collections
        .order_items
        .delete_one(doc! { "order_item_id": order_item_id.as_str() })
        .await?;
    require_deleted(deleted, ORDER_ITEM_NOT_FOUND)?;
    tracing::info!("Order item {} deleted by {}", order_item_id, user.user_id);
    Ok(Json(Deleted::new("Order item")))
}
