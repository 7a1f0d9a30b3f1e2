//! Server configuration from environment variables.
//!
//! | Variable                   | Default                          |
//! |----------------------------|----------------------------------|
//! | `HOST`                     | `0.0.0.0`                        |
//! | `PORT`                     | `4000`                           |
//! | `DATABASE_TYPE`            | `postgres` (or `memory`)         |
//! | `DATABASE_URL`             | `postgres://localhost/linkshelf` |
//! | `DATABASE_MAX_CONNECTIONS` | `10`                             |
//! | `ALLOWED_ORIGINS`          | `http://localhost:3000`          |
//! | `MAX_BODY_BYTES`           | `1048576`                        |
//!
//! Values can also come from a `.env` file loaded by the binary.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use linkshelf_core::{Error, Result};
use linkshelf_db::pool::DEFAULT_MAX_CONNECTIONS;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/linkshelf";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Which store backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    Postgres,
    /// Process-local storage, lost on restart.
    Memory,
}

impl std::str::FromStr for DatabaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DatabaseType::Postgres),
            "memory" => Ok(DatabaseType::Memory),
            other => Err(Error::Config(format!(
                "DATABASE_TYPE must be 'postgres' or 'memory', got '{}'",
                other
            ))),
        }
    }
}

/// Parsed server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_type: DatabaseType,
    pub database_url: String,
    pub max_connections: u32,
    pub allowed_origins: Vec<HeaderValue>,
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_type: DatabaseType::Postgres,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            allowed_origins: parse_allowed_origins(DEFAULT_ALLOWED_ORIGINS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT must be a port number, got '{}'", v)))?,
            None => defaults.port,
        };

        let database_type = match lookup("DATABASE_TYPE") {
            Some(v) => v.parse()?,
            None => defaults.database_type,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{}'",
                    v
                ))
            })?,
            None => defaults.max_connections,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(v) => v.trim().parse().map_err(|_| {
                Error::Config(format!("MAX_BODY_BYTES must be a byte count, got '{}'", v))
            })?,
            None => defaults.max_body_bytes,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_type,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|v| parse_allowed_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            max_body_bytes,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid HOST/PORT: {}", e)))
    }
}

/// Parse a comma-separated origin list, skipping blanks and invalid values.
///
/// An empty list falls back to [`DEFAULT_ALLOWED_ORIGINS`].
pub fn parse_allowed_origins(origins_str: &str) -> Vec<HeaderValue> {
    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    if origins.is_empty() {
        return vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGINS)];
    }
    origins
}
