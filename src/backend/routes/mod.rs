//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, fallback, CORS and tracing layers
//! - **`api_routes`** - `/api` endpoints, public and token-protected
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint routes
//! ```
//!
//! # Routes
//!
//! - `GET /` - Health check
//! - `POST /api/auth/signup`, `POST /api/auth/login` - Public
//! - `GET /api/profile` - Protected
//! - `/api/posts...` - Protected; mutations are owner-only

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
