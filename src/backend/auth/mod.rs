//! Authentication Module
//!
//! Account creation, credential checks and the session token lifecycle.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── clock.rs        - Injectable time source
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - JWT issuance, validation, persistence
//! ├── users.rs        - User model and store operations
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: Unique email and phone → password hashed → token pair
//!    issued and stored with the new user
//! 2. **Login**: Credentials verified → new pair issued, persisted and
//!    returned with the user
//! 3. **Gated requests**: `token` header validated by the auth gate
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 14 by default)
//! - Access tokens last 24 hours, refresh tokens 72 hours
//! - Invalid credentials return one generic 401 message

pub mod clock;
pub mod password;
pub mod sessions;
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use handlers::{get_user, get_users, login, signup};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{Claims, Identity, TokenError, TokenPair, TokenService};
pub use users::{Role, User};
