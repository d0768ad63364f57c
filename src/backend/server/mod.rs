//! Server Module
//!
//! Everything needed to turn a `ServerConfig` into a running Axum
//! application.
//!
//! # Architecture
//!
//! - **`config`** - Configuration loading, validation and database setup
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Application assembly
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig, ConfigError, load_database
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - create_app
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use vichar::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{load_database, ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_pool, InitError};
pub use state::AppState;
