//! Configuration loading and management

use crate::core::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Environment variable pointing at a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "ORDER_DESK_CONFIG";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Absolute prefix for `Link` header targets (e.g. `https://orders.example.com`)
    ///
    /// When unset, links are relative to the request path.
    pub public_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_url: None,
        }
    }
}

/// Page size limits for order listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when `perPage` is absent or malformed
    pub default_per_page: usize,
    /// Upper bound `perPage` is clamped to
    pub max_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: 7,
            max_per_page: 100,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete service configuration
///
/// Every section has defaults, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: HttpConfig,
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,

    /// Load the demo orders at startup
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: HttpConfig::default(),
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::default(),
            seed: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration for the binary
    ///
    /// Reads the file named by `ORDER_DESK_CONFIG` when set (defaults
    /// otherwise), then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ORDER_DESK_*` overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(host) = lookup("ORDER_DESK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ORDER_DESK_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: port.clone(),
                message: "expected a port number".to_string(),
            })?;
        }
        if let Some(url) = lookup("ORDER_DESK_PUBLIC_URL") {
            self.server.public_url = Some(url);
        }
        if let Some(json) = lookup("ORDER_DESK_LOG_JSON") {
            self.logging.json = matches!(json.as_str(), "1" | "true" | "yes");
        }
        Ok(())
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pagination = &self.pagination;
        if pagination.max_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.max_per_page".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(1..=pagination.max_per_page).contains(&pagination.default_per_page) {
            return Err(ConfigError::InvalidValue {
                field: "pagination.default_per_page".to_string(),
                value: pagination.default_per_page.to_string(),
                message: format!("must be between 1 and {}", pagination.max_per_page),
            });
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue {
            field: "server.host".to_string(),
            value: addr.clone(),
            message: "not a valid socket address".to_string(),
        })
    }
}
