//! Shared fixtures for the integration tests
//!
//! Each test file builds its own server over a private temporary
//! database, so tests can run in parallel without seeing each other's
//! data.

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

use jsonwebtoken::Algorithm;
use userboard::server::config::AppConfig;

/// Configuration used by test servers; mirrors the defaults except for
/// the secret, so accidentally honoring a real deployment's tokens is
/// impossible.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        jwt_algorithm: Algorithm::HS256,
        token_expire_minutes: 30,
        port: 0,
    }
}
