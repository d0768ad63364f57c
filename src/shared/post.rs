//! Post wire types
//!
//! Bodies for the post endpoints. Posts are the user-owned resource whose
//! mutations are gated on ownership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create post request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_public: bool,
}

/// Partial update; absent fields keep their current value
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_public: Option<bool>,
}

/// Author of a post as shown to readers
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostAuthor {
    pub id: Uuid,
    pub email: String,
}

/// A post as returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub author: PostAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
