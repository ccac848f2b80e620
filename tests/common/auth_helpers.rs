//! Authentication test helpers
//!
//! Creates accounts directly through the user directory and mints tokens
//! for them, skipping the HTTP endpoints. Tests that exercise the
//! registration and login endpoints themselves go through the wire
//! instead.

use sqlx::SqlitePool;
use userboard::auth::sessions::issue_token;
use userboard::auth::users::{create_user, NewUser};
use userboard::server::config::AppConfig;
use uuid::Uuid;

/// A registered user plus a ready-to-send bearer token
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a user in the database and issue a token for them
pub async fn create_test_user(
    pool: &SqlitePool,
    config: &AppConfig,
    email: &str,
    password: &str,
) -> TestUser {
    let user = create_user(
        pool,
        NewUser {
            name: format!("User {}", email),
            phone: "1234567890".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        },
    )
    .await
    .expect("Failed to create test user");

    let token = issue_token(&user, config).expect("Failed to issue test token");

    TestUser {
        id: user.id,
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
