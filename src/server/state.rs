//! Application State Management
//!
//! `AppState` is the single state container handed to the router. It holds
//! the SQLite pool and the loaded configuration; both are cheap to clone
//! (the pool is internally reference-counted, the config sits behind an
//! `Arc`).
//!
//! The `FromRef` implementation lets handlers that only query the database
//! extract `State<SqlitePool>` directly instead of taking the whole state.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::server::config::AppConfig;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db: SqlitePool,
    /// Runtime configuration (token secret, algorithm, lifetimes)
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Allows handlers to take `State<SqlitePool>` when they only need the pool
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
