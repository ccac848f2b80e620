//! User Model and Database Operations
//!
//! The user directory: the `users` table, lookups, registration and
//! credential checks. Passwords never leave this module unhashed and the
//! stored hash never appears in a response type.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::credentials::{hash_password, verify_password};
use crate::error::ApiError;

/// User row as stored in the database
///
/// Deliberately not `Serialize`; responses go through `UserResponse`,
/// which has no password hash field to leak.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for registering a user; `password` is still plaintext here
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Create a new user
///
/// Hashes the password and inserts the row. Fails with
/// `ApiError::DuplicateEmail` if the email is already registered; the
/// UNIQUE constraint backs the pre-check up under concurrent registration.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - Registration input with plaintext password
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, ApiError> {
    if get_user_by_email(pool, &new_user.email).await?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password(&new_user.password)?;
    let id = Uuid::new_v4();
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO users (id, name, phone, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(&new_user.name)
    .bind(&new_user.phone)
    .bind(&new_user.email)
    .bind(&password_hash)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(User {
            id,
            name: new_user.name,
            phone: new_user.phone,
            email: new_user.email,
            password_hash,
            created_at: now,
        }),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(ApiError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, phone, email, password_hash, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, phone, email, password_hash, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Check an email/password pair and return the matching user
///
/// Unknown email and wrong password produce the same
/// `ApiError::InvalidCredentials`, so a caller probing the endpoint cannot
/// tell which half failed.
pub async fn authenticate_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let Some(user) = get_user_by_email(pool, email).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(user)
}
