/**
 * Database Operations for Posts
 *
 * Every read joins the author's email so a post can be rendered without a
 * second query. Mutations are scoped by `author_id` as well as `id`, so even
 * a caller that skipped the ownership guard cannot change another user's
 * post.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::posts::guard::Owned;
use crate::shared::{PostAuthor, PostResponse};

const SELECT_POST: &str = r#"
    SELECT p.id, p.author_id, u.email AS author_email, p.title, p.content,
           p.is_public, p.created_at, p.updated_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// Post row joined with its author's email
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_email: String,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn to_response(&self) -> PostResponse {
        PostResponse {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            is_public: self.is_public,
            author: PostAuthor {
                id: self.author_id,
                email: self.author_email.clone(),
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Owned for Post {
    const RESOURCE: &'static str = "Post";

    fn owner_id(&self) -> Uuid {
        self.author_id
    }
}

/// Fields of a post edit; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_public: Option<bool>,
}

/// Create a new post
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `author_id` - Owner of the new post
/// * `title`, `content`, `is_public` - Post fields
///
/// # Returns
/// The stored post with its author joined
pub async fn create_post(
    pool: &SqlitePool,
    author_id: Uuid,
    title: &str,
    content: &str,
    is_public: bool,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, author_id, title, content, is_public, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(author_id)
    .bind(title)
    .bind(content)
    .bind(is_public)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_post(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Get a post by ID
///
/// # Returns
/// Post or None if not found
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let sql = format!("{} WHERE p.id = ?", SELECT_POST);
    sqlx::query_as::<_, Post>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Load all public posts, newest first
pub async fn list_public_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!(
        "{} WHERE p.is_public = 1 ORDER BY p.created_at DESC, p.rowid DESC",
        SELECT_POST
    );
    sqlx::query_as::<_, Post>(&sql).fetch_all(pool).await
}

/// Load every post owned by `author_id`, newest first
pub async fn list_posts_by_author(
    pool: &SqlitePool,
    author_id: Uuid,
) -> Result<Vec<Post>, sqlx::Error> {
    let sql = format!(
        "{} WHERE p.author_id = ? ORDER BY p.created_at DESC, p.rowid DESC",
        SELECT_POST
    );
    sqlx::query_as::<_, Post>(&sql)
        .bind(author_id)
        .fetch_all(pool)
        .await
}

/// Apply `changes` to a post owned by `author_id`
///
/// # Returns
/// The updated post, or None if no post with that id belongs to the author
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    author_id: Uuid,
    changes: &PostChanges,
) -> Result<Option<Post>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = COALESCE(?, title),
            content = COALESCE(?, content),
            is_public = COALESCE(?, is_public),
            updated_at = ?
        WHERE id = ? AND author_id = ?
        "#,
    )
    .bind(changes.title.as_deref())
    .bind(changes.content.as_deref())
    .bind(changes.is_public)
    .bind(Utc::now())
    .bind(id)
    .bind(author_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_post(pool, id).await
}

/// Delete a post owned by `author_id`
///
/// # Returns
/// Whether a post was deleted
pub async fn delete_post(pool: &SqlitePool, id: Uuid, author_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ? AND author_id = ?")
        .bind(id)
        .bind(author_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
