//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token gate for protected routes, plus the
//!   `AuthUser` extractor handlers use to read the verified identity
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware::from_fn_with_state, Router};
//! use vichar::backend::auth::TokenCodec;
//! use vichar::backend::middleware::auth_middleware;
//!
//! fn protect(routes: Router, tokens: Arc<TokenCodec>) -> Router {
//!     routes.route_layer(from_fn_with_state(tokens, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
