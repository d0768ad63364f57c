//! Posts Module
//!
//! User-owned blog posts: storage, HTTP handlers, and the ownership guard
//! that keeps mutations with the author.
//!
//! - **`guard`** - `OwnershipGuard` and the `Owned` trait
//! - **`db`** - SQLite operations
//! - **`handlers`** - HTTP handlers for `/api/posts`

pub mod db;
pub mod guard;
pub mod handlers;

pub use db::Post;
pub use guard::{Action, Owned, OwnershipGuard};
