/**
 * User Lookup Handlers
 *
 * GET /users and GET /users/{user_id}, both behind the token gate.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::{get_user_by_id, list_users};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

pub async fn get_users(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    tracing::debug!("User list requested by {}", caller.user_id);
    let users = list_users(state.collections.users.as_ref()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(state.collections.users.as_ref(), &user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("user not found"))?;
    Ok(Json(UserResponse::from(user)))
}
