//! Session Tokens
//!
//! Issues and validates the JWT access tokens returned by login. Tokens
//! are signed with the configured HMAC secret and carry the user id as
//! `sub` alongside the email, an expiry and an issued-at timestamp.
//!
//! Validation runs with zero leeway: a token one second past its expiry
//! is expired, full stop.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email at issue time
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Create an access token for a user
///
/// Lifetime comes from `TOKEN_EXPIRE_MINUTES`; the signing algorithm and
/// secret from the configuration.
pub fn issue_token(user: &User, config: &AppConfig) -> Result<String, ApiError> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(config.token_expire_minutes);

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    encode(&Header::new(config.jwt_algorithm), &claims, &key)
        .map_err(|e| ApiError::internal(format!("token signing failed: {}", e)))
}

/// Verify a token's signature and expiry, returning its claims
///
/// Expired tokens are reported separately from every other defect
/// (bad signature, wrong algorithm, garbage input) so the API can say
/// "expired" without leaking anything else.
pub fn validate_token(token: &str, config: &AppConfig) -> Result<Claims, ApiError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    let mut validation = Validation::new(config.jwt_algorithm);
    validation.leeway = 0;

    match decode::<Claims>(token, &key, &validation) {
        Ok(token_data) => Ok(token_data.claims),
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(ApiError::ExpiredToken),
            _ => Err(ApiError::InvalidToken),
        },
    }
}
