//! Authentication Module
//!
//! User accounts, password handling and access tokens.
//!
//! # Architecture
//!
//! - **`users`** - user model, lookups, registration, credential checks
//! - **`credentials`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuing and validation
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Tokens are HMAC-signed JWTs with a configurable lifetime
//! - Credential failures and token failures are reported without detail

/// User data model and database operations
pub mod users;

/// Password hashing and verification
pub mod credentials;

/// JWT token issuing and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{CreateUserRequest, LoginRequest, TokenResponse, UserResponse};
pub use handlers::{current_user, login, register};
pub use users::User;
