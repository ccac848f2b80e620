//! Server Module
//!
//! Everything needed to stand the HTTP server up, short of the routes
//! themselves.
//!
//! - **`config`** - environment configuration loading and validation
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - pool creation, migrations, app assembly
//!
//! # Initialization Flow
//!
//! 1. `AppConfig::from_env()` reads and validates the environment
//! 2. `create_app(config)` opens the pool, migrates, builds the router
//! 3. `main` binds the listener and serves

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Application state management
pub mod state;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
