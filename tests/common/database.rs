//! Database test fixtures and utilities
//!
//! Tests run against a real SQLite database in a temporary file. A file
//! (rather than `:memory:`) lets the pool open multiple connections that
//! all see the same data, exactly like production.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tempfile::NamedTempFile;

/// Test database fixture
///
/// Owns the backing tempfile; dropping the fixture removes the database.
pub struct TestDatabase {
    pool: SqlitePool,
    _db_file: NamedTempFile,
}

impl TestDatabase {
    /// Create a fresh, fully migrated database
    pub async fn new() -> Self {
        let db_file = NamedTempFile::new().expect("Failed to create temp database file");

        let options = SqliteConnectOptions::new()
            .filename(db_file.path())
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to create test database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _db_file: db_file,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
