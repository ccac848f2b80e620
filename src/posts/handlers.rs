//! Post Handlers
//!
//! HTTP handlers for the post endpoints. All of them sit behind the auth
//! middleware; `CurrentUser` is the account the token resolved to.
//!
//! Responses embed the owning user, except the "my posts" listing where
//! the owner is the caller and the embed would be redundant; there the
//! `user` field is `null`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::User;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::posts::db::{self, Post};

/// Body for creating or updating a post
#[derive(Deserialize, Serialize, Debug)]
pub struct PostRequest {
    /// Post title
    pub title: String,
    /// Post body
    pub description: String,
}

/// Post as returned to clients
#[derive(Serialize, Deserialize, Debug)]
pub struct PostResponse {
    /// Unique post ID
    pub id: Uuid,
    /// Owning user, or `null` where the owner is implied
    pub user: Option<UserResponse>,
    /// Post title
    pub title: String,
    /// Post body
    pub description: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Last modified timestamp
    pub updated_at: DateTime<Utc>,
}

impl PostResponse {
    fn from_post(post: Post, owner: Option<&User>) -> Self {
        Self {
            id: post.id,
            user: owner.map(UserResponse::from),
            title: post.title,
            description: post.description,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Create post handler
///
/// POST /api/v1/post - the new post is owned by the caller.
pub async fn create_post(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<PostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let post = db::create_post(&pool, user.id, &request.title, &request.description).await?;

    tracing::info!("Post {} created by user {}", post.id, user.id);

    Ok((
        StatusCode::CREATED,
        Json(PostResponse::from_post(post, Some(&user))),
    ))
}

/// List all posts handler
///
/// GET /api/v1/posts - every post from every user, oldest first.
pub async fn get_all_posts(
    State(pool): State<SqlitePool>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = db::list_posts_with_owners(&pool).await?;

    Ok(Json(
        posts
            .into_iter()
            .map(|(post, owner)| PostResponse::from_post(post, Some(&owner)))
            .collect(),
    ))
}

/// Get post handler
///
/// GET /api/v1/post/{post_id}
pub async fn get_post_by_id(
    State(pool): State<SqlitePool>,
    CurrentUser(_user): CurrentUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let (post, owner) = db::get_post_with_owner(&pool, post_id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    Ok(Json(PostResponse::from_post(post, Some(&owner))))
}

/// List own posts handler
///
/// GET /api/v1/post/user - only the caller's posts, owner left `null`.
pub async fn get_posts_by_user(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = db::list_posts_by_user(&pool, user.id).await?;

    Ok(Json(
        posts
            .into_iter()
            .map(|post| PostResponse::from_post(post, None))
            .collect(),
    ))
}

/// Update post handler
///
/// PUT /api/v1/post/{post_id} - full replacement of title and description,
/// owner only.
pub async fn update_post(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(post_id): Path<Uuid>,
    Json(request): Json<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = db::update_post(&pool, post_id, user.id, &request.title, &request.description)
        .await?;

    tracing::info!("Post {} updated by user {}", post.id, user.id);

    // The update succeeded, so the caller is the owner
    Ok(Json(PostResponse::from_post(post, Some(&user))))
}

/// Delete post handler
///
/// DELETE /api/v1/post/{post_id} - owner only, responds 204 with no body.
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    db::delete_post(&pool, post_id, user.id).await?;

    tracing::info!("Post {} deleted by user {}", post_id, user.id);

    Ok(StatusCode::NO_CONTENT)
}
