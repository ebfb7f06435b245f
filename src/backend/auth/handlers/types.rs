/**
 * Authentication Handler Types
 *
 * Request and response bodies for signup, login and user lookups.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::{Role, User};
use crate::shared::error::SharedError;
use crate::shared::validation::{require, require_email, require_len};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    /// Plaintext; hashed before storage
    pub password: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_len("first_name", self.first_name.trim(), 2, 100)?;
        require_len("last_name", self.last_name.trim(), 2, 100)?;
        require_len("password", &self.password, 6, 128)?;
        require_email("email", &self.email)?;
        require("phone", &self.phone)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_email("email", &self.email)?;
        require("password", &self.password)
    }
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            token: user.token,
            refresh_token: user.refresh_token,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
