//! Registration Handler
//!
//! POST /api/v1/user
//!
//! 1. Validate the email shape
//! 2. Create the user (duplicate emails are rejected by the directory)
//! 3. Return the created user with 201 Created
//!
//! There is deliberately no password policy here; accounts own their
//! password choices. The only gate is that the email must look like an
//! email.

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{CreateUserRequest, UserResponse};
use crate::auth::users::{create_user, NewUser};
use crate::error::ApiError;

/// Validate email format
///
/// Intentionally shallow: one `@`, a non-empty local part, and a domain
/// with at least one dot. Anything stricter belongs to a confirmation
/// mail, not a regex.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - email failed validation
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("Registration request for email: {}", request.email);

    if !is_valid_email(&request.email) {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::validation(format!(
            "Invalid email: {:?} is not a valid email address",
            request.email
        )));
    }

    let user = create_user(
        &pool,
        NewUser {
            name: request.name,
            phone: request.phone,
            email: request.email,
            password: request.password,
        },
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    fn request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: "Test User".to_string(),
            phone: "1234567890".to_string(),
            email: email.to_string(),
            password: "pw1".to_string(),
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));

        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@x."));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@b@x.com"));
        assert!(!is_valid_email(""));
    }

    #[tokio::test]
    async fn test_register_success() {
        let pool = test_pool().await;

        let (status, Json(user)) = register(State(pool), Json(request("new@example.com")))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.name, "Test User");
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let pool = test_pool().await;

        let result = register(State(pool), Json(request("invalid-email"))).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let pool = test_pool().await;

        register(State(pool.clone()), Json(request("dup@example.com")))
            .await
            .unwrap();

        let result = register(State(pool), Json(request("dup@example.com"))).await;
        assert!(matches!(result, Err(ApiError::DuplicateEmail)));
    }
}
