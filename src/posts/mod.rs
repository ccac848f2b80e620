//! Posts Module
//!
//! User-owned posts: the data model, the store and the HTTP handlers.
//!
//! - **`db`** - `Post` model, CRUD queries, ownership enforcement
//! - **`handlers`** - HTTP handlers for the `/api/v1/post*` endpoints
//!
//! Every post belongs to exactly one user. Anyone authenticated can read
//! any post; only the owner can change or delete one.

/// Post model and database operations
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

// Re-export commonly used types
pub use db::Post;
pub use handlers::{PostRequest, PostResponse};
