//! Shared Error Types
//!
//! This module defines error types that are shared between the frontend and backend.
//! A client can run the same credential checks the server runs and get the same
//! error back before a request ever leaves the device.
//!
//! # Usage
//!
//! ```rust
//! use vichar::shared::error::SharedError;
//!
//! // Create a validation error
//! let error = SharedError::validation("password", "Password must be at least 6 characters long");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Shared error types that can occur in both frontend and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message, safe to show to the user
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The user-facing part of the error, without the field prefix
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
