//! Request extractors
//!
//! `JsonBody<T>` behaves like `axum::Json<T>` but rejects malformed or
//! mistyped bodies with the standard 400 JSON error instead of axum's plain
//! text 4xx.
//!
//! `QueryOrDefault<T>` never rejects: a query string that does not
//! deserialize (duplicated keys, a key given together with its alias) is
//! replaced by `T::default()`.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(BackendError::bad_request(rejection.body_text()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOrDefault<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryOrDefault<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(
                    "Ignoring query string on {}: {}",
                    parts.uri.path(),
                    rejection.body_text()
                );
                Ok(Self(T::default()))
            }
        }
    }
}
