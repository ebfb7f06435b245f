//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── users.rs    - User lookup handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /users/signup - User registration
//! - **`login`** - POST /users/login - User authentication
//! - **`get_users`** - GET /users - List users (gated)
//! - **`get_user`** - GET /users/{user_id} - Fetch one user (gated)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// User lookup handlers
pub mod users;

pub use login::login;
pub use signup::signup;
pub use types::{LoginRequest, SignupRequest, UserResponse};
pub use users::{get_user, get_users};
