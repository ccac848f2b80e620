//! Error Conversion
//!
//! Renders `ApiError` as an HTTP response so handlers can return it
//! directly. The body is JSON:
//!
//! ```json
//! {
//!   "error": "Email already registered",
//!   "reason": "duplicate_email",
//!   "status": 409
//! }
//! ```
//!
//! 401 responses additionally carry `WWW-Authenticate: Bearer`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client errors are expected traffic; server errors get the full
        // chain logged here and a generic message on the wire.
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "reason": self.reason(),
            "status": status.as_u16(),
        });

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
