//! Route Configuration Module
//!
//! HTTP route wiring for the server.
//!
//! - **`api_routes`** - the `/api/v1` route table and public/protected split
//! - **`router`** - final assembly: fallback, tracing, CORS, state

/// API endpoint route table
pub mod api_routes;

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
