/**
 * Application State Management
 *
 * `AppState` is built once at startup and cloned into every handler. All
 * members are cheap handles (`Arc`s or `Copy` values).
 *
 * The `FromRef` implementations let middleware extract only the part they
 * need: the auth gate takes `Arc<TokenService>`, the deadline layer takes
 * `RequestTimeout`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::clock::{Clock, SystemClock};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::middleware::RequestTimeout;
use crate::backend::store::Collections;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub collections: Collections,
    pub tokens: Arc<TokenService>,
    pub passwords: PasswordHasher,
    pub clock: Arc<dyn Clock>,
    pub request_timeout: RequestTimeout,
}

impl AppState {
    /// Wire state around `collections` using the system clock
    pub fn new(collections: Collections, config: &AppConfig) -> Self {
        Self::with_clock(collections, config, Arc::new(SystemClock))
    }

    /// Wire state with an explicit time source
    pub fn with_clock(collections: Collections, config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        let tokens = TokenService::new(
            &config.secret_key,
            clock.clone(),
            collections.users.clone(),
        );

        Self {
            collections,
            tokens: Arc::new(tokens),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            clock,
            request_timeout: RequestTimeout(config.request_timeout),
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for RequestTimeout {
    fn from_ref(state: &AppState) -> Self {
        state.request_timeout
    }
}
