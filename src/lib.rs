//! Vichar - Blog Backend Core
//!
//! Vichar is the server behind a small blogging app. Its engineering lives in
//! the credential and session layer: account creation, password
//! verification, signed bearer tokens, and ownership checks that keep a
//! post's mutations with its author.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between server and clients
//!   - Request/response bodies for auth and posts
//!   - Credential policy (email domain allow-list, password length)
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and middleware
//!   - bcrypt password hashing, JWT sessions
//!   - SQLite persistence through sqlx
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and its dependencies.
//!   Without it only `shared` is built, so a client can reuse the wire types
//!   and run the same signup checks locally.
//!
//! # Usage
//!
//! ```rust,no_run
//! use vichar::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::BackendError` for everything a handler can return; it renders
//!   as `{"message": ...}` with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
