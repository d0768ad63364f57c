//! Shared Module
//!
//! Types shared between the server and its clients: request and response
//! bodies, the credential policy, and the errors that policy produces.
//! Nothing here depends on the `ssr` feature.

/// Shared error types
pub mod error;

/// Email and password rules for signup
pub mod policy;

/// Authentication request/response bodies
pub mod auth;

/// Post request/response bodies
pub mod post;

pub use error::SharedError;
pub use policy::{normalize_email, CredentialPolicy};
pub use auth::{AuthResponse, LoginRequest, MessageResponse, ProfileResponse, SignupRequest, UserResponse};
pub use post::{CreatePostRequest, PostAuthor, PostResponse, UpdatePostRequest};
