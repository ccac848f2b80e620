//! Server Configuration
//!
//! Loads the runtime configuration from environment variables once at
//! startup. Every value has a development default so `userboard-server`
//! runs out of the box; production deployments are expected to set
//! `JWT_SECRET` and `DATABASE_URL` explicitly.
//!
//! # Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default `sqlite://userboard.db?mode=rwc`)
//! - `JWT_SECRET` - HMAC signing secret (default triggers a warning)
//! - `JWT_ALGORITHM` - HS256 | HS384 | HS512 (default HS256)
//! - `TOKEN_EXPIRE_MINUTES` - token lifetime (default 30)
//! - `SERVER_PORT` - listen port (default 3000)

use jsonwebtoken::Algorithm;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://userboard.db?mode=rwc";
const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_TOKEN_EXPIRE_MINUTES: i64 = 30;
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Configuration problems that should abort startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Tokens are symmetric-key only; asymmetric algorithms need key
    /// material this service does not manage.
    #[error("unsupported JWT_ALGORITHM {0:?}: expected HS256, HS384 or HS512")]
    UnsupportedAlgorithm(String),

    #[error("invalid {name}: {value:?} is not a valid number")]
    InvalidNumber { name: &'static str, value: String },
}

/// Immutable runtime configuration, loaded once and shared via `AppState`
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string handed to sqlx
    pub database_url: String,
    /// Secret for signing and verifying access tokens
    pub jwt_secret: String,
    /// HMAC variant used for access tokens
    pub jwt_algorithm: Algorithm,
    /// Access token lifetime in minutes; may be negative in tests to
    /// mint already-expired tokens
    pub token_expire_minutes: i64,
    /// TCP port the server binds on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Missing variables fall back to development defaults. Present but
    /// unparseable values are errors: a typo in `TOKEN_EXPIRE_MINUTES` or
    /// an RSA algorithm name should stop the server, not be silently
    /// replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the built-in development secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        let jwt_algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(name) => parse_hmac_algorithm(&name)?,
            Err(_) => Algorithm::HS256,
        };

        let token_expire_minutes = match std::env::var("TOKEN_EXPIRE_MINUTES") {
            Ok(raw) => raw.parse::<i64>().map_err(|_| ConfigError::InvalidNumber {
                name: "TOKEN_EXPIRE_MINUTES",
                value: raw,
            })?,
            Err(_) => DEFAULT_TOKEN_EXPIRE_MINUTES,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_algorithm,
            token_expire_minutes,
            port,
        })
    }
}

/// Parse an HMAC algorithm name, rejecting everything else
fn parse_hmac_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::UnsupportedAlgorithm(other.to_string())),
    }
}
