/**
 * Server Configuration
 *
 * This module loads and validates server configuration and opens the
 * SQLite database.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (after `dotenv` has
 * loaded an optional `.env` file), with defaults for local development.
 * Only `JWT_SECRET` is required.
 *
 * | Variable                | Default                  |
 * |-------------------------|--------------------------|
 * | `SERVER_PORT`           | `5000`                   |
 * | `DATABASE_URL`          | `sqlite://vichar.db`     |
 * | `JWT_SECRET`            | required, at least 32 bytes |
 * | `TOKEN_TTL_HOURS`       | `24`                     |
 * | `BCRYPT_COST`           | `10`                     |
 * | `ALLOWED_EMAIL_DOMAINS` | `gmail.com` (empty: any) |
 * | `MIN_PASSWORD_LENGTH`   | `6`                      |
 * | `CORS_ORIGINS`          | `http://localhost:3000`  |
 *
 * # Error Handling
 *
 * Unlike optional services, a bad value here stops startup: the server
 * refuses to run with a weak secret or an unparseable setting.
 */

use std::fmt;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::password::{DEFAULT_COST, MAX_COST, MIN_COST};
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_HOURS;
use crate::shared::policy::{DEFAULT_ALLOWED_DOMAIN, DEFAULT_MIN_PASSWORD_LENGTH};
use crate::shared::CredentialPolicy;

/// Port used when `SERVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Database used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite://vichar.db";

/// Origin allowed when `CORS_ORIGINS` is unset
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Shortest accepted HMAC secret, in bytes
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least {min} bytes")]
    WeakSecret { min: usize },
}

/// Validated server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub allowed_email_domains: Vec<String>,
    pub min_password_length: usize,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(hours) = lookup("TOKEN_TTL_HOURS") {
            builder = builder.token_ttl_hours(parse_value("TOKEN_TTL_HOURS", &hours)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }
        if let Some(domains) = lookup("ALLOWED_EMAIL_DOMAINS") {
            builder = builder.allowed_email_domains(split_list(&domains));
        }
        if let Some(length) = lookup("MIN_PASSWORD_LENGTH") {
            builder = builder.min_password_length(parse_value("MIN_PASSWORD_LENGTH", &length)?);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            builder = builder.cors_origins(split_list(&origins));
        }

        builder.build()
    }

    /// Signup rules derived from this configuration
    pub fn credential_policy(&self) -> CredentialPolicy {
        CredentialPolicy::new(&self.allowed_email_domains, self.min_password_length)
    }

    /// Token lifetime
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.token_ttl_hours)
    }
}

// The secret is never printed.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("allowed_email_domains", &self.allowed_email_domains)
            .field("min_password_length", &self.min_password_length)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

/// Builder for ServerConfig
pub struct ServerConfigBuilder {
    port: u16,
    database_url: String,
    jwt_secret: Option<String>,
    token_ttl_hours: i64,
    bcrypt_cost: u32,
    allowed_email_domains: Vec<String>,
    min_password_length: usize,
    cors_origins: Vec<String>,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            bcrypt_cost: DEFAULT_COST,
            allowed_email_domains: vec![DEFAULT_ALLOWED_DOMAIN.to_string()],
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = hours;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the allowed email domains; an empty list allows any domain
    pub fn allowed_email_domains(mut self, domains: Vec<String>) -> Self {
        self.allowed_email_domains = domains;
        self
    }

    pub fn min_password_length(mut self, length: usize) -> Self {
        self.min_password_length = length;
        self
    }

    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::WeakSecret {
                min: MIN_SECRET_BYTES,
            });
        }

        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&self.token_ttl_hours) {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                value: self.token_ttl_hours.to_string(),
            });
        }

        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }

        if self.min_password_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MIN_PASSWORD_LENGTH",
                value: "0".to_string(),
            });
        }

        Ok(ServerConfig {
            port: self.port,
            database_url: self.database_url,
            jwt_secret,
            token_ttl_hours: self.token_ttl_hours,
            bcrypt_cost: self.bcrypt_cost,
            allowed_email_domains: self.allowed_email_domains,
            min_password_length: self.min_password_length,
            cors_origins: self.cors_origins,
        })
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Open the SQLite database and run migrations
///
/// This function:
/// 1. Parses `database_url`, creating the file if it does not exist
/// 2. Creates a connection pool
/// 3. Runs the migrations in `migrations/`
///
/// An in-memory database lives only as long as its connection, so it gets
/// a single connection that is never recycled.
///
/// # Errors
///
/// Any connection or migration failure. Unlike an optional service, the
/// server cannot run without its user store.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    tracing::info!("Connecting to database...");

    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
