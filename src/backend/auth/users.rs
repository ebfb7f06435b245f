/**
 * User Model and Store Operations
 *
 * User accounts live in the `user` collection. `email` and `phone` are
 * unique; the password is stored only as a bcrypt hash and is never
 * returned by a handler.
 */

use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::Identity;
use crate::backend::store::{self, Collection, InsertAck, StoreError};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// User record as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Public user id (24 hex chars)
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// bcrypt hash
    pub password: String,
    /// Current access token
    #[serde(default)]
    pub token: Option<String>,
    /// Current refresh token
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

/// Insert a new user
///
/// # Errors
///
/// `StoreError::Duplicate` when the email or phone is already taken.
pub async fn create_user(users: &dyn Collection, user: &User) -> Result<InsertAck, StoreError> {
    store::insert_keyed(users, &user.user_id, user).await
}

pub async fn get_user_by_email(
    users: &dyn Collection,
    email: &str,
) -> Result<Option<User>, StoreError> {
    store::find_one(users, doc! { "email": email }).await
}

pub async fn get_user_by_id(
    users: &dyn Collection,
    user_id: &str,
) -> Result<Option<User>, StoreError> {
    store::find_one(users, doc! { "user_id": user_id }).await
}

pub async fn email_exists(users: &dyn Collection, email: &str) -> Result<bool, StoreError> {
    store::exists(users, doc! { "email": email }).await
}

pub async fn phone_exists(users: &dyn Collection, phone: &str) -> Result<bool, StoreError> {
    store::exists(users, doc! { "phone": phone }).await
}

pub async fn list_users(users: &dyn Collection) -> Result<Vec<User>, StoreError> {
    store::find_all(users, doc! {}).await
}
