//! API Route Handlers
//!
//! The `/api/v1` route table, split into the public endpoints and the
//! bearer-token-protected ones.
//!
//! # Routes
//!
//! ## Public
//! - `POST /api/v1/user` - register
//! - `POST /api/v1/login` - exchange credentials for a token
//! - `GET /api/v1/health` - liveness probe
//!
//! ## Protected (Authorization: Bearer)
//! - `GET /api/v1/current-user` - account behind the token
//! - `POST /api/v1/post` - create a post
//! - `GET /api/v1/posts` - list every post
//! - `GET /api/v1/post/user` - list the caller's posts
//! - `GET /api/v1/post/{post_id}` - fetch one post
//! - `PUT /api/v1/post/{post_id}` - update (owner only)
//! - `DELETE /api/v1/post/{post_id}` - delete (owner only)
//!
//! `/api/v1/post/user` is registered alongside `/api/v1/post/{post_id}`;
//! the static segment wins, so "user" is never parsed as a post id.

use axum::response::Json;
use axum::Router;

use crate::auth::{current_user, login, register};
use crate::middleware::auth::require_auth;
use crate::posts::handlers::{
    create_post, delete_post, get_all_posts, get_post_by_id, get_posts_by_user, update_post,
};
use crate::server::state::AppState;

/// Configure API routes
///
/// The protected group carries the auth middleware as a route layer, so
/// unmatched paths still fall through to the fallback instead of a 401.
pub fn configure_api_routes(app_state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/v1/user", axum::routing::post(register))
        .route("/api/v1/login", axum::routing::post(login))
        .route("/api/v1/health", axum::routing::get(health));

    let protected = Router::new()
        .route("/api/v1/current-user", axum::routing::get(current_user))
        .route("/api/v1/post", axum::routing::post(create_post))
        .route("/api/v1/posts", axum::routing::get(get_all_posts))
        .route("/api/v1/post/user", axum::routing::get(get_posts_by_user))
        .route(
            "/api/v1/post/{post_id}",
            axum::routing::get(get_post_by_id)
                .put(update_post)
                .delete(delete_post),
        )
        .route_layer(axum::middleware::from_fn_with_state(app_state, require_auth));

    public.merge(protected)
}

/// Liveness probe; no auth, no database access
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
