//! Authentication Module
//!
//! This module handles user registration, login and session tokens. It
//! provides HTTP handlers for the authentication endpoints and the services
//! those handlers delegate to.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and SQLite operations
//! - **`store`** - `CredentialStore` interface the account service consumes
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - Bearer token issuing and verification
//! - **`account`** - Signup/login orchestration
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── store.rs        - Credential store trait
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Token management
//! ├── account.rs      - AccountService
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── profile.rs  - Current user profile handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → policy checks → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Profile**: token verified by the auth middleware → profile returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless HS256 JWTs that expire after 24 hours by default
//! - Failed logins return one message whether the email exists or not

/// User model and database operations
pub mod users;

/// Credential store interface
pub mod store;

/// Password hashing
pub mod password;

/// Token management
pub mod sessions;

/// Signup and login orchestration
pub mod account;

/// HTTP handlers
pub mod handlers;

pub use account::AccountService;
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenCodec, TokenError};
pub use store::{CredentialStore, StoreError};
pub use users::{SqliteCredentialStore, User};

pub use handlers::{get_profile, login, signup};
