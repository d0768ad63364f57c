//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. Each one extracts the
//! request, delegates to [`AccountService`](crate::backend::auth::AccountService)
//! and maps the result to a response; errors render through `BackendError`.
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration (201)
//! - **`login`** - POST /api/auth/login - User authentication (200)
//! - **`get_profile`** - GET /api/profile - Current user profile (bearer token)
//!
//! # Example
//!
//! ```rust,no_run
//! use vichar::backend::auth::handlers::{signup, login};
//! use vichar::backend::auth::AccountService;
//! use axum::{routing::post, Router};
//!
//! fn auth_routes(accounts: AccountService) -> Router {
//!     Router::new()
//!         .route("/api/auth/signup", post(signup))
//!         .route("/api/auth/login", post(login))
//!         .with_state(accounts)
//! }
//! ```

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

pub use login::login;
pub use profile::get_profile;
pub use signup::signup;
