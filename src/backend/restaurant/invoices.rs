/**
 * Invoice Handlers
 *
 * - GET    /invoices
 * - GET    /invoices/{invoice_id}
 * - POST   /invoices                - order must exist
 * - PATCH  /invoices/{invoice_id}
 * - DELETE /invoices/{invoice_id}
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use mongodb::bson::doc;

use super::orders::ORDER_NOT_FOUND;
use super::{ensure_exists, new_id, require_deleted, require_matched, Deleted};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::patch::timestamp;
use crate::backend::store::{self, InsertAck, MergePatch, UpdateAck};
use crate::shared::restaurant::{Invoice, InvoiceUpdate, NewInvoice};

const INVOICE_NOT_FOUND: &str = "invoice not found";

pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<Invoice>>, BackendError> {
    let invoices = store::find_all(state.collections.invoices.as_ref(), doc! {}).await?;
    Ok(Json(invoices))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<Invoice>, BackendError> {
    let invoice = store::find_one(
        state.collections.invoices.as_ref(),
        doc! { "invoice_id": invoice_id.as_str() },
    )
    .await?
    .ok_or_else(|| BackendError::not_found(INVOICE_NOT_FOUND))?;
    Ok(Json(invoice))
}

pub async fn create_invoice(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<NewInvoice>,
) -> Result<Json<InsertAck>, BackendError> {
    request.validate()?;
    ensure_exists(
        state.collections.orders.as_ref(),
        "order_id",
        &request.order_id,
        ORDER_NOT_FOUND,
    )
    .await?;

    let invoice = request.into_record(new_id(), state.clock.now());
    let ack = store::insert_keyed(
        state.collections.invoices.as_ref(),
        &invoice.invoice_id,
        &invoice,
    )
    .await?;
    tracing::info!("Invoice {} created by {}", invoice.invoice_id, user.user_id);
    Ok(Json(ack))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(invoice_id): Path<String>,
    JsonBody(update): JsonBody<InvoiceUpdate>,
) -> Result<Json<UpdateAck>, BackendError> {
    update.validate()?;

    let patch = MergePatch::new()
        .set_opt("payment_method", update.payment_method)
        .set_opt("payment_status", update.payment_status)
        .set_opt("payment_due_date", update.payment_due_date.map(timestamp))
        .touch(state.clock.now());

    let ack = state
        .collections
        .invoices
        .update_one(doc! { "invoice_id": invoice_id.as_str() }, patch, false)
        .await?;
    let ack = require_matched(ack, INVOICE_NOT_FOUND)?;
    tracing::info!("Invoice {} updated by {}", invoice_id, user.user_id);
    Ok(Json(ack))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(invoice_id): Path<String>,
) -> Result<Json<Deleted>, BackendError> {
    let deleted = state
        .collections
        .invoices
        .delete_one(doc! { "invoice_id": invoice_id.as_str() })
        .await?;
    require_deleted(deleted, INVOICE_NOT_FOUND)?;
    tracing::info!("Invoice {} deleted by {}", invoice_id, user.user_id);
    Ok(Json(Deleted::new("Invoice")))
}
