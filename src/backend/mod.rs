//! Backend Module
//!
//! This module contains all server-side code for Vichar: an Axum HTTP
//! server with account signup and login, bearer-token sessions, and
//! user-owned posts whose mutations are restricted to their author.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, credential store, tokens, account service
//! - **`middleware`** - Bearer token gate and the `AuthUser` extractor
//! - **`posts`** - Posts and the ownership guard
//! - **`error`** - `BackendError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── posts/          - Posts and ownership
//! └── error/          - Error types
//! ```
//!
//! # Request Pipeline
//!
//! Every protected request runs the same linear pipeline, with a
//! `Result<_, BackendError>` at each stage:
//!
//! 1. **Extract** - path, body and bearer token
//! 2. **Authenticate** - `auth_middleware` verifies the token
//! 3. **Authorize** - `OwnershipGuard` checks mutations against the owner
//! 4. **Execute** - the handler talks to the database
//! 5. **Respond** - success body, or `{"message": ...}` with a status code
//!
//! # Thread Safety
//!
//! `AppState` holds no mutable state: the pool, the account service and the
//! token codec are all shared read-only. The one race, two signups with the
//! same email, is settled by the `UNIQUE` constraint on `users.email`.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Posts and ownership checks
#[cfg(feature = "ssr")]
pub mod posts;


/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, ServerConfig};
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use auth::{AccountService, PasswordHasher, TokenCodec};
#[cfg(feature = "ssr")]
pub use middleware::{AuthUser, AuthenticatedUser};
#[cfg(feature = "ssr")]
pub use posts::OwnershipGuard;
