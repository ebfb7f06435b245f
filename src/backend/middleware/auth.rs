/**
 * Authentication Middleware
 *
 * Guards every protected route. The raw token travels in the custom `token`
 * header (no `Bearer` prefix). On success the caller's identity is attached
 * to the request extensions; this is the only place that happens.
 *
 * | Condition               | Response                                   |
 * |-------------------------|--------------------------------------------|
 * | header missing or empty | 403 `No Authorization header provided`     |
 * | any validation failure  | 403 `Invalid token` (reason only logged)   |
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claims, TokenService};
use crate::backend::error::BackendError;

pub const TOKEN_HEADER: &str = "token";

pub const MISSING_TOKEN: &str = "No Authorization header provided";
pub const INVALID_TOKEN: &str = "Invalid token";

/// Authenticated user data extracted from the token claims
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
        }
    }
}

/// Token gate
///
/// 1. Reads the `token` header
/// 2. Validates it with the token service
/// 3. Attaches `AuthenticatedUser` to request extensions
pub async fn auth_gate(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing token header on {}", request.uri().path());
            BackendError::forbidden(MISSING_TOKEN)
        })?;

    let claims = tokens.validate(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::forbidden(INVALID_TOKEN)
    })?;

    tracing::debug!("Authenticated user {}", claims.user_id);
    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by `auth_gate`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::forbidden(MISSING_TOKEN)
            })?;

        Ok(AuthUser(user))
    }
}
