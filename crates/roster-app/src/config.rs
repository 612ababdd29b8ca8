//! Environment-driven application configuration.
//!
//! # Design
//! - Read every setting through a lookup function so tests never touch process env.
//! - Fail startup on malformed values instead of silently falling back.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use roster_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig};

use crate::error::{AppError, AppResult};

/// Environment variable naming the listener address.
pub const ENV_BIND_ADDR: &str = "ROSTER_BIND_ADDR";
/// Environment variable naming the listener port.
pub const ENV_HTTP_PORT: &str = "ROSTER_HTTP_PORT";
/// Environment variable naming the default log level.
pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
/// Environment variable selecting `json` or `pretty` logs.
pub const ENV_LOG_FORMAT: &str = "ROSTER_LOG_FORMAT";
/// Environment variable naming the directory served at `/`.
pub const ENV_STATIC_DIR: &str = "ROSTER_STATIC_DIR";
/// Environment variable naming the SQLite database holding users.
pub const ENV_DATABASE_URL: &str = "ROSTER_DATABASE_URL";

/// Port used when `ROSTER_HTTP_PORT` is unset.
pub const DEFAULT_HTTP_PORT: u16 = 5000;
/// Database used when `ROSTER_DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://site.db";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the listener binds to.
    pub bind_addr: IpAddr,
    /// Port the listener binds to.
    pub http_port: u16,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Directory with the built web UI, if any.
    pub static_dir: Option<PathBuf>,
    /// SQLite connection URL for the user store.
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port: DEFAULT_HTTP_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::infer(),
            static_dir: None,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a variable is set to an unusable value.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        if let Some(raw) = value(ENV_BIND_ADDR) {
            config.bind_addr = raw
                .parse()
                .map_err(|_| AppError::invalid_config("bind_addr", "unparseable", raw))?;
        }
        if let Some(raw) = value(ENV_HTTP_PORT) {
            let port: u16 = raw
                .parse()
                .map_err(|_| AppError::invalid_config("http_port", "out_of_range", raw.clone()))?;
            if port == 0 {
                return Err(AppError::invalid_config("http_port", "zero", raw));
            }
            config.http_port = port;
        }
        if let Some(raw) = value(ENV_LOG_LEVEL) {
            config.log_level = raw;
        }
        if let Some(raw) = value(ENV_LOG_FORMAT) {
            config.log_format = LogFormat::parse(&raw)
                .ok_or_else(|| AppError::invalid_config("log_format", "unknown", raw))?;
        }
        config.static_dir = value(ENV_STATIC_DIR).map(PathBuf::from);
        if let Some(raw) = value(ENV_DATABASE_URL) {
            if !raw.starts_with("sqlite:") {
                return Err(AppError::invalid_config("database_url", "not_sqlite", raw));
            }
            config.database_url = raw;
        }
        Ok(config)
    }

    /// Socket address for the API listener.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }

    /// Logging settings derived from this configuration.
    #[must_use]
    pub fn logging(&self) -> LoggingConfig<'_> {
        LoggingConfig {
            level: &self.log_level,
            format: self.log_format,
            ..LoggingConfig::default()
        }
    }
}
