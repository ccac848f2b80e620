//! Current User Handler
//!
//! GET /api/v1/current-user
//!
//! The auth middleware has already validated the token and loaded the
//! account, so this handler only reshapes it for the wire.

use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::middleware::auth::CurrentUser;

/// Current user handler; 401s are produced by the middleware before this runs
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}
