//! Backend Error Module
//!
//! This module defines the error type used by handlers, services and
//! middleware, and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status/message mapping
//! ├── conversion.rs - IntoResponse implementation
//! └── rejection.rs  - ApiJson body extractor and its rejections
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Request body extraction
pub mod rejection;

// Re-export commonly used types
pub use rejection::ApiJson;
pub use types::BackendError;
