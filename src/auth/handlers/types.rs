//! Authentication Handler Types
//!
//! Request and response bodies for the registration, login and
//! current-user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Email address; must be unique across all users
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address the account was registered with
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Successful login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT access token
    pub access_token: String,
    /// Always `"bearer"`; clients send the token in an
    /// `Authorization: Bearer <token>` header
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User as returned to clients; never carries the password hash
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}
