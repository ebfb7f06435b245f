/**
 * Public Account Routes
 *
 * - `POST /users/signup`
 * - `POST /users/login`
 */

use axum::{routing::post, Router};

use crate::backend::auth::handlers::{login, signup};
use crate::backend::server::state::AppState;

pub fn configure_user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(signup))
        .route("/users/login", post(login))
}
