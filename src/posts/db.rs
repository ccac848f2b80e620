//! Database operations for posts
//!
//! The post store: CRUD on the `posts` table plus the ownership rules.
//! Update and delete verify the requester owns the post and fail with
//! `NotFound` before `Forbidden`, so a caller cannot distinguish "someone
//! else's post" from "no post" only when the post truly does not exist.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::auth::users::User;
use crate::error::ApiError;

/// Post row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,
    /// Owning user's ID
    pub user_id: Uuid,
    /// Post title
    pub title: String,
    /// Post body
    pub description: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Last modified timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new post owned by `owner_id`
pub async fn create_post(
    pool: &SqlitePool,
    owner_id: Uuid,
    title: &str,
    description: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, user_id, title, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(title)
    .bind(description)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Post {
        id,
        user_id: owner_id,
        title: title.to_string(),
        description: description.to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Get a post by ID
pub async fn get_post(pool: &SqlitePool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, title, description, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Get a post by ID together with its owner
pub async fn get_post_with_owner(
    pool: &SqlitePool,
    post_id: Uuid,
) -> Result<Option<(Post, User)>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.user_id, p.title, p.description, p.created_at, p.updated_at,
               u.name AS owner_name, u.phone AS owner_phone, u.email AS owner_email,
               u.password_hash AS owner_password_hash, u.created_at AS owner_created_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| post_with_owner_from_row(&row)))
}

/// List every post with its owner, oldest first
pub async fn list_posts_with_owners(pool: &SqlitePool) -> Result<Vec<(Post, User)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.user_id, p.title, p.description, p.created_at, p.updated_at,
               u.name AS owner_name, u.phone AS owner_phone, u.email AS owner_email,
               u.password_hash AS owner_password_hash, u.created_at AS owner_created_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        ORDER BY p.created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(post_with_owner_from_row)
        .collect())
}

/// List a single user's posts, oldest first
pub async fn list_posts_by_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, title, description, created_at, updated_at
        FROM posts
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Replace a post's title and description
///
/// Only the owner may update. `updated_at` moves, `created_at` does not.
pub async fn update_post(
    pool: &SqlitePool,
    post_id: Uuid,
    requester_id: Uuid,
    title: &str,
    description: &str,
) -> Result<Post, ApiError> {
    let post = get_post(pool, post_id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    if post.user_id != requester_id {
        return Err(ApiError::forbidden(
            "You are not authorized to update this post",
        ));
    }

    let now = Utc::now();

    sqlx::query(
        r#"
        UPDATE posts
        SET title = $1, description = $2, updated_at = $3
        WHERE id = $4
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(now)
    .bind(post_id)
    .execute(pool)
    .await
    .map_err(ApiError::from)?;

    Ok(Post {
        title: title.to_string(),
        description: description.to_string(),
        updated_at: now,
        ..post
    })
}

/// Delete a post
///
/// Only the owner may delete.
pub async fn delete_post(
    pool: &SqlitePool,
    post_id: Uuid,
    requester_id: Uuid,
) -> Result<(), ApiError> {
    let post = get_post(pool, post_id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    if post.user_id != requester_id {
        return Err(ApiError::forbidden(
            "You are not authorized to delete this post",
        ));
    }

    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await
        .map_err(ApiError::from)?;

    Ok(())
}

fn post_with_owner_from_row(row: &sqlx::sqlite::SqliteRow) -> (Post, User) {
    let post = Post {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    };
    let owner = User {
        id: post.user_id,
        name: row.get("owner_name"),
        phone: row.get("owner_phone"),
        email: row.get("owner_email"),
        password_hash: row.get("owner_password_hash"),
        created_at: row.get("owner_created_at"),
    };
    (post, owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::{create_user, NewUser};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    async fn seed_user(pool: &SqlitePool, email: &str) -> User {
        create_user(
            pool,
            NewUser {
                name: format!("Owner of {}", email),
                phone: "1234567890".to_string(),
                email: email.to_string(),
                password: "pw1".to_string(),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_post() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;

        let created = create_post(&pool, owner.id, "First", "Hello").await.unwrap();
        assert_eq!(created.user_id, owner.id);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = get_post(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "First");
        assert_eq!(fetched.description, "Hello");
    }

    #[tokio::test]
    async fn test_get_post_with_owner() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let created = create_post(&pool, owner.id, "Mine", "Body").await.unwrap();

        let (post, user) = get_post_with_owner(&pool, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(post.id, created.id);
        assert_eq!(user.id, owner.id);
        assert_eq!(user.email, "owner@example.com");
    }

    #[tokio::test]
    async fn test_get_missing_post() {
        let pool = test_pool().await;
        assert!(get_post(&pool, Uuid::new_v4()).await.unwrap().is_none());
        assert!(get_post_with_owner(&pool, Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_listing_preserves_insertion_order() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;

        let first = create_post(&pool, owner.id, "one", "1").await.unwrap();
        let second = create_post(&pool, owner.id, "two", "2").await.unwrap();
        let third = create_post(&pool, owner.id, "three", "3").await.unwrap();

        let all = list_posts_with_owners(&pool).await.unwrap();
        let ids: Vec<Uuid> = all.iter().map(|(p, _)| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test]
    async fn test_list_posts_by_user_filters_owner() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice@example.com").await;
        let bob = seed_user(&pool, "bob@example.com").await;

        create_post(&pool, alice.id, "a1", "").await.unwrap();
        create_post(&pool, bob.id, "b1", "").await.unwrap();
        create_post(&pool, alice.id, "a2", "").await.unwrap();

        let alices = list_posts_by_user(&pool, alice.id).await.unwrap();
        let titles: Vec<&str> = alices.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_update_post_by_owner() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let created = create_post(&pool, owner.id, "Old", "old body").await.unwrap();

        let updated = update_post(&pool, created.id, owner.id, "New", "new body")
            .await
            .unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let fetched = get_post(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.description, "new body");
    }

    #[tokio::test]
    async fn test_update_post_by_non_owner() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let intruder = seed_user(&pool, "intruder@example.com").await;
        let created = create_post(&pool, owner.id, "Mine", "").await.unwrap();

        let result = update_post(&pool, created.id, intruder.id, "Stolen", "").await;
        assert!(matches!(result, Err(ApiError::Forbidden(_))));

        // Unchanged
        let fetched = get_post(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Mine");
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;

        let result = update_post(&pool, Uuid::new_v4(), owner.id, "x", "y").await;
        assert!(matches!(result, Err(ApiError::NotFound("Post"))));
    }

    #[tokio::test]
    async fn test_delete_post_by_owner() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let created = create_post(&pool, owner.id, "Doomed", "").await.unwrap();

        delete_post(&pool, created.id, owner.id).await.unwrap();
        assert!(get_post(&pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_post_by_non_owner() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;
        let intruder = seed_user(&pool, "intruder@example.com").await;
        let created = create_post(&pool, owner.id, "Mine", "").await.unwrap();

        let result = delete_post(&pool, created.id, intruder.id).await;
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
        assert!(get_post(&pool, created.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_post() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@example.com").await;

        let result = delete_post(&pool, Uuid::new_v4(), owner.id).await;
        assert!(matches!(result, Err(ApiError::NotFound("Post"))));
    }
}
