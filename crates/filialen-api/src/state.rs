//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor, plus the environment-driven configuration it
//! is built from.
//!
//! ## Composition
//!
//! `main` builds the repository (PostgreSQL when `DATABASE_URL` is set,
//! in-memory otherwise), wraps it in a [`FiliaalService`], and hands both
//! the service and the [`AppConfig`] to [`AppState::with_config`].

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::repository::{FiliaalRepository, InMemoryFiliaalRepository};
use crate::service::FiliaalService;

// -- Configuration ------------------------------------------------------------

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid {
                var: "LOG_FORMAT",
                value: other.to_string(),
                reason: "expected \"text\" or \"json\"".to_string(),
            }),
        }
    }
}

/// Error reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable was set but its value could not be used.
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// PostgreSQL connection URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub database_max_connections: u32,
    /// Base URL for hypermedia links, e.g. `https://api.example.com`.
    /// When `None`, links are derived from the request's `Host` header.
    pub public_base_url: Option<String>,
    /// Origins allowed by CORS. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("database_max_connections", &self.database_max_connections)
            .field("public_base_url", &self.public_base_url)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: None,
            database_max_connections: 10,
            public_base_url: None,
            cors_allowed_origins: Vec::new(),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables fall back to [`AppConfig::default`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => parse_number("PORT", &v)?,
            None => defaults.port,
        };
        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => parse_number("DATABASE_MAX_CONNECTIONS", &v)?,
            None => defaults.database_max_connections,
        };
        let log_format = match get("LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => defaults.log_format,
        };
        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            database_max_connections,
            public_base_url: get("PUBLIC_BASE_URL").map(|v| v.trim_end_matches('/').to_string()),
            cors_allowed_origins,
            log_format,
        })
    }
}

fn parse_number<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

// -- Application State --------------------------------------------------------

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: FiliaalService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Default configuration backed by an empty in-memory store.
    pub fn new() -> Self {
        Self::with_config(
            AppConfig::default(),
            Arc::new(InMemoryFiliaalRepository::new()),
        )
    }

    /// Build state from configuration and a repository implementation.
    pub fn with_config(config: AppConfig, repository: Arc<dyn FiliaalRepository>) -> Self {
        Self {
            service: FiliaalService::new(repository),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
