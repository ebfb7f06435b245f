//! Application configuration module
//!
//! Loads process-wide settings once at startup. The signing secret is
//! mandatory: a missing or empty `SECRET_KEY` is a startup error, never a
//! silently degraded token service.
//!
//! # Environment
//!
//! | Variable               | Default      |
//! |------------------------|--------------|
//! | `PORT`                 | `8080`       |
//! | `SECRET_KEY`           | required     |
//! | `MONGODB_URI`          | unset        |
//! | `MONGODB_DATABASE`     | `restaurant` |
//! | `REQUEST_TIMEOUT_SECS` | `30`         |
//! | `BCRYPT_COST`          | `14`         |

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE: &str = "restaurant";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_BCRYPT_COST: u32 = 14;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// HMAC key for access and refresh tokens
    pub secret_key: SecretString,
    /// MongoDB connection string; `None` selects the in-memory store
    pub mongodb_uri: Option<String>,
    /// Database holding the restaurant collections
    pub database_name: String,
    /// Deadline applied to every request
    pub request_timeout: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(port) = env_var("PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("PORT", port))?;
            builder = builder.port(port);
        }
        if let Some(secret) = env_var("SECRET_KEY") {
            builder = builder.secret_key(secret);
        }
        if let Some(uri) = env_var("MONGODB_URI") {
            builder = builder.mongodb_uri(uri);
        }
        if let Some(name) = env_var("MONGODB_DATABASE") {
            builder = builder.database_name(name);
        }
        if let Some(secs) = env_var("REQUEST_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS", secs))?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Some(cost) = env_var("BCRYPT_COST") {
            let cost = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("BCRYPT_COST", cost))?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.expose_secret().is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "REQUEST_TIMEOUT_SECS",
                "0".to_string(),
            ));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "BCRYPT_COST",
                self.bcrypt_cost.to_string(),
            ));
        }
        if self.database_name.trim().is_empty() {
            return Err(ConfigError::MissingValue("MONGODB_DATABASE"));
        }
        Ok(())
    }
}

/// Empty values count as unset
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    secret_key: Option<String>,
    mongodb_uri: Option<String>,
    database_name: Option<String>,
    request_timeout: Option<Duration>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn secret_key(mut self, secret: impl Into<String>) -> Self {
        self.secret_key = Some(secret.into());
        self
    }

    pub fn mongodb_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self
    }

    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    ///
    /// Fails when the secret is missing or any value is out of range.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let secret = self
            .secret_key
            .ok_or(ConfigError::MissingValue("SECRET_KEY"))?;

        let config = AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            secret_key: SecretString::from(secret),
            mongodb_uri: self.mongodb_uri,
            database_name: self
                .database_name
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
