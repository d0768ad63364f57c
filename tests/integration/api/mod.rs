//! API integration tests
//!
//! Integration tests for all API endpoints

mod posts_test;
