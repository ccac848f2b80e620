//! Userboard - Main Library
//!
//! Userboard is a small REST backend for user accounts and the posts they
//! write: registration, JWT-based login, and CRUD on posts with ownership
//! enforcement. SQLite through sqlx, served by Axum on Tokio.
//!
//! # Module Structure
//!
//! - **`auth`** - accounts, password hashing, JWT sessions, auth endpoints
//! - **`posts`** - post model, store and CRUD endpoints
//! - **`middleware`** - bearer-token middleware and `CurrentUser` extractor
//! - **`routes`** - the `/api/v1` route table and router assembly
//! - **`server`** - configuration, state, pool and app initialization
//! - **`error`** - the `ApiError` taxonomy and its JSON rendering
//!
//! # Usage
//!
//! ```rust,no_run
//! use userboard::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result<_, ApiError>`; the error renders
//! itself as a JSON response with a stable `reason` tag, so handlers
//! propagate with `?` and never build error responses by hand.

/// Accounts, credentials and sessions
pub mod auth;

/// API error taxonomy
pub mod error;

/// HTTP middleware
pub mod middleware;

/// Posts and their endpoints
pub mod posts;

/// Route configuration
pub mod routes;

/// Server configuration and initialization
pub mod server;
