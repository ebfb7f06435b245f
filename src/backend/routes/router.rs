/**
 * Router Configuration
 *
 * Combines the public and gated route sets and wraps them in the request
 * deadline and HTTP trace layers.
 */

use axum::{middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

use crate::backend::middleware::deadline;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::user_routes::configure_user_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Collections, token service and request settings
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .merge(configure_user_routes())
        .merge(configure_api_routes(app_state.clone()))
        .layer(from_fn_with_state(app_state.clone(), deadline))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
