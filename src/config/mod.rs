//! Configuration loading and management
//!
//! The whole configuration is optional: every section falls back to its
//! defaults, so an empty YAML document is a valid configuration.
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 8080
//! api:
//!   base_url: "https://events.example.com"
//!   docs_path: /docs/index.html
//! paging:
//!   default_size: 20
//!   max_size: 2000
//! accounts:
//!   default_admin:
//!     email: admin@example.com
//!     password: change-me
//! ```

use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub paging: PagingConfig,
    pub accounts: AccountsConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Socket address in `host:port` form
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings used when rendering hypermedia links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every href (empty renders root-relative hrefs)
    pub base_url: String,

    /// Path of the generated API documentation, target of profile links
    pub docs_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            docs_path: "/docs/index.html".to_string(),
        }
    }
}

/// Paging defaults applied to list requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 2000,
        }
    }
}

/// Account seeding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsConfig {
    /// Administrator account created at startup, if any
    pub default_admin: Option<DefaultAdmin>,
}

/// Credentials of the seeded administrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultAdmin {
    pub email: String,
    pub password: String,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        Self::parse(&content, Some(path.display().to_string()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        // serde_yaml rejects a document with no content at all
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
                file,
                message: e.to_string(),
            })?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.paging.default_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "paging.default_size".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.paging.max_size < self.paging.default_size {
            return Err(ConfigError::InvalidValue {
                field: "paging.max_size".to_string(),
                value: self.paging.max_size.to_string(),
                message: format!(
                    "must not be smaller than paging.default_size ({})",
                    self.paging.default_size
                ),
            });
        }
        if self.api.base_url.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                value: self.api.base_url.clone(),
                message: "must not end with '/'".to_string(),
            });
        }
        Ok(())
    }
}
