/**
 * Table Handlers
 *
 * - GET    /tables
 * - GET    /tables/{table_id}
 * - POST   /tables
 * - PATCH  /tables/{table_id}
 * - DELETE /tables/{table_id}
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
use crate::backend::store::{self, InsertAck, MergePatch, UpdateAck};
use crate::shared::restaurant::{NewTable, Table, TableUpdate};

const TABLE_NOT_FOUND: &str = "table not found";

pub async fn list_tables(State(state): State<AppState>) -> Result<Json<Vec<Table>>, BackendError> {
    let tables = store::find_all(state.collections.tables.as_ref(), doc! {}).await?;
    Ok(Json(tables))
}

pub async fn get_table(
    State(state): State<AppState>,
    Path(table_id): Path<String>,
) -> Result<Json<Table>, BackendError> {
    let table = store::find_one(state.collections.tables.as_ref(), doc! { "table_id": table_id.as_str() })
        .await?
        .ok_or_else(|| BackendError::not_found(TABLE_NOT_FOUND))?;
    Ok(Json(table))
}

pub async fn create_table(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<NewTable>,
) -> Result<Json<InsertAck>, BackendError> {
    request.validate()?;

    let table = request.into_record(new_id(), state.clock.now());
    let ack = store::insert_keyed(
        state.collections.tables.as_ref(),
        &table.table_id,
        &table,
    )
    .await?;
    tracing::info!("Table {} created by {}", table.table_id, user.user_id);
    Ok(Json(ack))
}

pub async fn update_table(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(table_id): Path<String>,
    JsonBody(update): JsonBody<TableUpdate>,
) -> Result<Json<UpdateAck>, BackendError> {
    update.validate()?;

    let patch = MergePatch::new()
        .set_opt("table_name", update.table_name)
        .set_opt("number_of_guests", update.number_of_guests)
        .touch(state.clock.now());

    let ack = state
        .collections
        .tables
        .update_one(doc! { "table_id": table_id.as_str() }, patch, false)
        .await?;
    let ack = require_matched(ack, TABLE_NOT_FOUND)?;
    tracing::info!("Table {} updated by {}", table_id, user.user_id);
    Ok(Json(ack))
}

pub async fn delete_table(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(table_id): Path<String>,
) -> Result<Json<Deleted>, BackendError> {
    let deleted = state
        .collections
        .tables
        .delete_one(doc! { "table_id": table_id.as_str() })
        .await?;
    require_deleted(deleted, TABLE_NOT_FOUND)?;
    tracing::info!("Table {} deleted by {}", table_id, user.user_id);
    Ok(Json(Deleted::new("Table")))
}
