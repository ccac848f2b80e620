//! API Error Module
//!
//! One error type for everything the API can report, plus its rendering as
//! an HTTP response.
//!
//! - **`types`** - the `ApiError` enum, status/reason/message mapping
//! - **`conversion`** - `IntoResponse` so handlers return `ApiError` directly

pub mod conversion;
pub mod types;

pub use types::ApiError;
