//! Application configuration module
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file named by `AUTH_CONFIG_FILE`
//! 3. environment variables (`JWT_SECRET`, `JWT_ISSUER`, `BIND_ADDR`,
//!    `SERVER_PORT`, `BCRYPT_COST`)
//!
//! The signing secret has no default: startup fails without one.
//!
//! ```toml
//! jwt_secret = "change-me"
//! issuer = "wallet-app"
//! bind_addr = "127.0.0.1:8080"
//! bcrypt_cost = 12
//! ```

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default `iss` claim
pub const DEFAULT_ISSUER: &str = "wallet-app";

/// Valid bcrypt cost range
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// HMAC key for signing session tokens
    pub jwt_secret: String,
    /// Issuer name written into and required from tokens
    pub issuer: String,
    /// Bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = match lookup("AUTH_CONFIG_FILE") {
            Some(path) => AppConfigBuilder::from_file(Path::new(&path))?,
            None => AppConfigBuilder::default(),
        };

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(issuer) = lookup("JWT_ISSUER") {
            builder = builder.issuer(issuer);
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            builder = builder.bind_addr(parse_value("BIND_ADDR", &addr)?);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.issuer.is_empty() {
            return Err(ConfigError::MissingValue("JWT_ISSUER"));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!(
                    "{} is outside {}..={}",
                    self.bcrypt_cost,
                    BCRYPT_COST_RANGE.start(),
                    BCRYPT_COST_RANGE.end()
                ),
            });
        }
        if self.jwt_secret.len() < 32 {
            tracing::warn!("JWT_SECRET is shorter than 32 bytes; use a longer random key");
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfigBuilder {
    bind_addr: Option<SocketAddr>,
    #[serde(skip)]
    port: Option<u16>,
    jwt_secret: Option<String>,
    issuer: Option<String>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Start from the contents of a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Start from a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Override only the port of the bind address
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let mut bind_addr = match self.bind_addr {
            Some(addr) => addr,
            None => parse_value("BIND_ADDR", DEFAULT_BIND_ADDR)?,
        };
        if let Some(port) = self.port {
            bind_addr.set_port(port);
        }

        let config = AppConfig {
            bind_addr,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            issuer: self.issuer.unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}
