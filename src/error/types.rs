//! API Error Types
//!
//! This module defines the error taxonomy for the HTTP API. Every fallible
//! handler, store and auth operation returns `ApiError`, and the conversion
//! module renders it as a JSON response with the matching status code.
//!
//! # Status Code Mapping
//!
//! - `Validation` - 400 Bad Request
//! - `DuplicateEmail` - 409 Conflict
//! - `InvalidCredentials`, `InvalidToken`, `ExpiredToken` - 401 Unauthorized
//! - `NotFound` - 404 Not Found
//! - `Forbidden` - 403 Forbidden
//! - `Database`, `Internal` - 500 Internal Server Error

use axum::http::StatusCode;
use thiserror::Error;

/// All errors the API can surface to a client.
///
/// Authentication failures are deliberately coarse: a login attempt against
/// an unknown email and one with a wrong password both produce
/// `InvalidCredentials`, so the response does not reveal which part was
/// wrong. Token problems distinguish expiry from everything else because
/// clients handle the two differently.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input that passed deserialization (e.g. an invalid email)
    #[error("{0}")]
    Validation(String),

    /// Registration against an email that already has an account
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password at login
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, tampered or otherwise unusable bearer token
    #[error("Invalid authentication credentials")]
    InvalidToken,

    /// Structurally valid token whose expiry has passed
    #[error("Token expired")]
    ExpiredToken,

    /// Resource lookup by id that matched nothing
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Authenticated caller is not the owner of the resource
    #[error("{0}")]
    Forbidden(String),

    /// Query or connection failure from the database layer
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should never reach a client in detail
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a validation error from a formatted message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a forbidden error from a formatted message
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create an internal error from a formatted message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::InvalidToken | Self::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a stable machine-readable tag for this error
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidToken => "invalid_token",
            Self::ExpiredToken => "expired_token",
            Self::NotFound(_) => "not_found",
            Self::Forbidden(_) => "forbidden",
            Self::Database(_) | Self::Internal(_) => "internal_error",
        }
    }

    /// Get the message shown to the client
    ///
    /// Server-side failures are collapsed to a generic message; the full
    /// error is logged where the response is built, never sent on the wire.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
