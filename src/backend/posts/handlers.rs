/**
 * Post Handlers
 *
 * HTTP handlers for `/api/posts`. All of them sit behind the auth
 * middleware; the mutating ones also consult the ownership guard.
 *
 * # Endpoints
 *
 * - `GET /api/posts/all` - public feed, newest first
 * - `GET /api/posts` - the caller's own posts, newest first
 * - `POST /api/posts` - create a post owned by the caller (201)
 * - `GET /api/posts/{id}` - one post
 * - `PUT /api/posts/{id}` - edit, owner only
 * - `DELETE /api/posts/{id}` - delete, owner only
 *
 * A post id that is malformed, unknown, or owned by someone else (for the
 * owner-only routes) gets the same `404 Post not found`.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{ApiJson, BackendError};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::posts::db::{self, Post, PostChanges};
use crate::backend::posts::guard::{Action, OwnershipGuard};
use crate::shared::{CreatePostRequest, MessageResponse, PostResponse, SharedError, UpdatePostRequest};

fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found("Post"))
}

async fn load_post(pool: &SqlitePool, id: Uuid) -> Result<Post, BackendError> {
    db::get_post(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))
}

// Trimmed value, or a validation error when nothing is left.
fn required_text(value: &str, message: &str) -> Result<String, BackendError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation("post", message).into());
    }
    Ok(trimmed.to_string())
}

/// Public feed
pub async fn list_public(
    State(pool): State<SqlitePool>,
    AuthUser(_user): AuthUser,
) -> Result<Json<Vec<PostResponse>>, BackendError> {
    let posts = db::list_public_posts(&pool).await?;
    Ok(Json(posts.iter().map(Post::to_response).collect()))
}

/// Posts owned by the caller
pub async fn list_own(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<PostResponse>>, BackendError> {
    let posts = db::list_posts_by_author(&pool, user.user_id).await?;
    Ok(Json(posts.iter().map(Post::to_response).collect()))
}

/// Create a post owned by the caller
///
/// # Errors
///
/// * `400 Bad Request` - title or content missing or blank
/// * `404 Not Found` - the token names a user that no longer exists
pub async fn create(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), BackendError> {
    const MISSING: &str = "Title and content are required";
    let title = required_text(&request.title, MISSING)?;
    let content = required_text(&request.content, MISSING)?;

    let author_id = OwnershipGuard::owner_for_new(&user);
    let post = db::create_post(&pool, author_id, &title, &content, request.is_public)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                BackendError::not_found("User")
            }
            e => BackendError::Storage(e),
        })?;

    tracing::info!(post_id = %post.id, author_id = %author_id, "Post created");
    Ok((StatusCode::CREATED, Json(post.to_response())))
}

/// One post by id
pub async fn get_one(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, BackendError> {
    let post = load_post(&pool, parse_post_id(&id)?).await?;
    OwnershipGuard::authorize(&user, Action::Read, &post)?;
    Ok(Json(post.to_response()))
}

/// Edit a post; owner only
pub async fn update(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>, BackendError> {
    let post = load_post(&pool, parse_post_id(&id)?).await?;
    OwnershipGuard::authorize(&user, Action::Update, &post)?;

    let changes = PostChanges {
        title: request
            .title
            .as_deref()
            .map(|t| required_text(t, "Title cannot be empty"))
            .transpose()?,
        content: request
            .content
            .as_deref()
            .map(|c| required_text(c, "Content cannot be empty"))
            .transpose()?,
        is_public: request.is_public,
    };

    let updated = db::update_post(&pool, post.id, user.user_id, &changes)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;

    tracing::info!(post_id = %updated.id, "Post updated");
    Ok(Json(updated.to_response()))
}

/// Delete a post; owner only
pub async fn delete(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let post = load_post(&pool, parse_post_id(&id)?).await?;
    OwnershipGuard::authorize(&user, Action::Delete, &post)?;

    if !db::delete_post(&pool, post.id, user.user_id).await? {
        return Err(BackendError::not_found("Post"));
    }

    tracing::info!(post_id = %post.id, "Post deleted");
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
