/**
 * Signup Handler
 *
 * POST /users/signup
 *
 * # Registration Process
 *
 * 1. Validate required fields and email format (400)
 * 2. Reject a taken email (409) before spending time on hashing
 * 3. Hash the password with bcrypt
 * 4. Reject a taken phone number (409)
 * 5. Assign a fresh user id and timestamps
 * 6. Issue the token pair and store it on the new record
 * 7. Insert; a unique-index violation from a concurrent signup is also 409
 */

use axum::{extract::State, response::Json};
use mongodb::bson::oid::ObjectId;

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::users::{create_user, email_exists, phone_exists, User};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::backend::store::InsertAck;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, bad email, malformed body
/// * `409 Conflict` - Email or phone already registered
/// * `500 Internal Server Error` - Hashing, signing or store failure
///
/// # Example Request
///
/// ```http
/// POST /users/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "first_name": "Ada",
///   "last_name": "Lovelace",
///   "password": "analytical",
///   "email": "ada@example.com",
///   "phone": "555-0101",
///   "role": "admin"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "inserted_id": "65f0c0ffee0123456789abcd" }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<Json<InsertAck>, BackendError> {
    tracing::info!("Signup request for email: {}", request.email);
    request.validate()?;

    let users = state.collections.users.as_ref();

    if email_exists(users, &request.email).await? {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("Email already exists"));
    }

    let password_hash = state.passwords.hash(&request.password).await?;

    if phone_exists(users, &request.phone).await? {
        tracing::warn!("Phone number already exists: {}", request.phone);
        return Err(BackendError::conflict("Phone number already exists"));
    }

    let now = state.clock.now();
    let mut user = User {
        user_id: ObjectId::new().to_hex(),
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        email: request.email,
        phone: request.phone,
        role: request.role,
        password: password_hash,
        token: None,
        refresh_token: None,
        created_at: now,
        updated_at: now,
    };

    let pair = state.tokens.issue(&user.identity())?;
    user.token = Some(pair.token);
    user.refresh_token = Some(pair.refresh_token);

    let ack = create_user(users, &user).await?;
    tracing::info!("User created: {}", user.user_id);

    Ok(Json(ack))
}
