/**
 * Login Handler
 *
 * POST /users/login
 *
 * # Authentication Process
 *
 * 1. Validate the body (400)
 * 2. Look up the user by email
 * 3. Verify the password with bcrypt
 * 4. Issue a new token pair from the stored user and persist it
 * 5. Return the user with the new tokens
 *
 * An unknown email and a wrong password produce the same 401 body. Token
 * persistence is best effort: a failure is logged and the login still
 * succeeds.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, UserResponse};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or email
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store or signing failure
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);
    request.validate()?;

    let mut user = get_user_by_email(state.collections.users.as_ref(), &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;

    if !state.passwords.verify(&request.password, &user.password).await {
        tracing::warn!("Invalid password for user: {}", user.user_id);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let pair = state.tokens.issue(&user.identity())?;
    if let Err(e) = state.tokens.persist(&user.user_id, &pair).await {
        tracing::error!("Failed to persist tokens for {}: {}", user.user_id, e);
    }

    user.token = Some(pair.token);
    user.refresh_token = Some(pair.refresh_token);
    user.updated_at = state.clock.now();

    tracing::info!("User logged in: {}", user.user_id);
    Ok(Json(UserResponse::from(user)))
}
