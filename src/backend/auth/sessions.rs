/**
 * Session Tokens
 *
 * Issues, validates and persists the JWT pair handed to a user at signup and
 * login.
 *
 * # Tokens
 *
 * | Kind    | Lifetime | Stored as       |
 * |---------|----------|-----------------|
 * | access  | 24h      | `token`         |
 * | refresh | 72h      | `refresh_token` |
 *
 * Both are HS256 over the same identity claims and are sent back by clients
 * in the `token` header. Expiry is checked against the injected `Clock`
 * rather than the library's own wall-clock check, so tests can move time.
 * Re-issuing replaces the stored pair; old tokens stay valid until they
 * expire.
 */

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::doc;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::clock::Clock;
use crate::backend::store::{CollectionRef, MergePatch, StoreError, UpdateAck};

pub const ACCESS_TOKEN_TTL: Duration = Duration::hours(24);
pub const REFRESH_TOKEN_TTL: Duration = Duration::hours(72);

/// Identity carried inside every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_id: String,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_id: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

/// An access token and its refresh token, signed together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("token has expired")]
    Expired,

    #[error("failed to persist tokens: {0}")]
    Persist(#[from] StoreError),
}

/// Issues and checks session tokens for the user collection
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
    users: CollectionRef,
}

impl TokenService {
    /// # Arguments
    ///
    /// * `secret` - HMAC signing key, already checked to be non-empty
    /// * `clock` - Time source for `iat`, `exp` and expiry checks
    /// * `users` - Collection the latest pair is written to
    pub fn new(secret: &SecretString, clock: Arc<dyn Clock>, users: CollectionRef) -> Self {
        let key = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Self {
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
            validation,
            clock,
            users,
        }
    }

    /// Sign a fresh access/refresh pair for `identity`
    pub fn issue(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        let now = self.clock.now();
        let claims = |ttl: Duration| Claims {
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            user_id: identity.user_id.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let header = Header::new(Algorithm::HS256);
        let token = encode(&header, &claims(ACCESS_TOKEN_TTL), &self.encoding)
            .map_err(TokenError::Signing)?;
        let refresh_token = encode(&header, &claims(REFRESH_TOKEN_TTL), &self.encoding)
            .map_err(TokenError::Signing)?;

        Ok(TokenPair {
            token,
            refresh_token,
        })
    }

    /// Decode a token, failing on a bad signature, bad shape or `exp <= now`
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(TokenError::Invalid)?;

        if data.claims.exp <= self.clock.now().timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }

    /// Store `pair` on the user record keyed by `user_id`, creating it if absent
    pub async fn persist(&self, user_id: &str, pair: &TokenPair) -> Result<UpdateAck, TokenError> {
        let patch = MergePatch::new()
            .set("token", pair.token.as_str())
            .set("refresh_token", pair.refresh_token.as_str())
            .touch(self.clock.now());

        let ack = self
            .users
            .update_one(doc! { "user_id": user_id }, patch, true)
            .await?;
        Ok(ack)
    }
}
