//! Integration tests
//!
//! Tests that drive the full router against a real SQLite database.

mod api;
