//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! - **`register`** - POST /api/v1/user - create an account
//! - **`login`** - POST /api/v1/login - exchange credentials for a token
//! - **`current_user`** - GET /api/v1/current-user - whoami for a token
//!
//! # Authentication Flow
//!
//! 1. **Register**: name/phone/email/password → account created (201)
//! 2. **Login**: email/password → `{access_token, token_type}` (200)
//! 3. **Current user**: bearer token → account details (200)
//!
//! Invalid credentials and unusable tokens both come back as 401 with no
//! hint about which part failed.

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

// Re-export commonly used types
pub use types::{CreateUserRequest, LoginRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::current_user;
pub use register::register;
