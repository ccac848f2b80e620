//! Middleware Module
//!
//! Request-processing layers that run before handlers.
//!
//! - **`auth`** - bearer-token authentication for protected routes

pub mod auth;

pub use auth::{require_auth, CurrentUser};
