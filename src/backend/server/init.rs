/**
 * Server Initialization
 *
 * Builds the store, the application state and the router.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when a configured MongoDB deployment cannot be reached or the user
/// indexes cannot be created.
pub async fn create_app(config: &AppConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing restaurant API");

    let collections = load_store(config).await?;
    let state = AppState::new(collections, config);

    Ok(build_router(state))
}

/// Router over an already-built state
pub fn build_router(state: AppState) -> Router {
    create_router(state)
}
