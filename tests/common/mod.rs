//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - HTTP request helpers
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod http;

pub use auth_helpers::*;
pub use database::*;
pub use http::*;
