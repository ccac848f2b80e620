//! Server Initialization
//!
//! Builds the running application from a loaded configuration:
//!
//! 1. Open the SQLite pool (creating the database file if needed)
//! 2. Run embedded migrations
//! 3. Assemble `AppState` and the router
//!
//! Unlike configuration loading, none of these steps are allowed to fail
//! softly. A server that cannot reach its database has nothing to serve.

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Open the connection pool and bring the schema up to date
///
/// Foreign keys are enforced per connection; SQLite leaves them off by
/// default.
pub async fn connect_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

/// Create and configure the Axum application
///
/// Consumes the configuration and returns a router ready to be served.
pub async fn create_app(config: AppConfig) -> Result<Router, ApiError> {
    tracing::info!("Initializing userboard server");

    let db = connect_database(&config).await?;
    let app_state = AppState::new(db, config);

    Ok(create_router(app_state))
}
