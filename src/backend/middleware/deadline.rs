//! Request deadline
//!
//! Wraps the rest of the stack in `tokio::time::timeout`. When the deadline
//! passes the handler future, and any store call it is awaiting, is dropped
//! and the client receives a 500 `request timed out`.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(pub Duration);

pub async fn deadline(
    State(RequestTimeout(limit)): State<RequestTimeout>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let path = request.uri().path().to_owned();
    tokio::time::timeout(limit, next.run(request))
        .await
        .map_err(|_| {
            tracing::error!("Request to {} exceeded {:?}", path, limit);
            BackendError::Timeout
        })
}
