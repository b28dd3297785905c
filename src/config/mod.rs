//! Configuration management for the vitrine shell server
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. Configuration is an explicitly constructed value
//! passed into components; nothing here is a process-global singleton.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use url::Url;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site configuration (domain, locales, analytics)
    pub site: SiteConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Site-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Root domain used for canonical and alternate URLs (no scheme)
    pub root_domain: String,

    /// Supported locale codes, in presentation order
    pub locales: Vec<String>,

    /// Default locale; must be one of `locales`
    pub default_locale: String,

    /// Analytics identifier; scripts are injected only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// Enable CORS for the API
    pub enable_cors: bool,

    /// Enable per-request trace logging
    pub enable_request_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let root_domain =
            std::env::var("VITRINE_ROOT_DOMAIN").unwrap_or_else(|_| String::from("example.com"));

        let locales = std::env::var("VITRINE_LOCALES")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|_| vec![String::from("en"), String::from("es"), String::from("ko")]);

        let default_locale =
            std::env::var("VITRINE_DEFAULT_LOCALE").unwrap_or_else(|_| String::from("en"));

        let analytics_id = std::env::var("VITRINE_ANALYTICS_ID")
            .ok()
            .filter(|v| !v.is_empty());

        let bind_address = std::env::var("VITRINE_BIND_ADDRESS")
            .ok()
            .and_then(|v| v.parse::<SocketAddr>().ok())
            .unwrap_or_else(|| "0.0.0.0:8080".parse().expect("static address"));

        let log_level = std::env::var("VITRINE_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("VITRINE_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        let config = Self {
            site: SiteConfig {
                root_domain,
                locales,
                default_locale,
                analytics_id,
            },
            server: ServerConfig {
                bind_address,
                enable_cors: true,
                enable_request_logging: true,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.site.root_domain.is_empty() {
            return Err(Error::config("root_domain must not be empty"));
        }

        // Domain must form a valid https origin when canonical URLs are built
        let origin = format!("https://{}", self.site.root_domain);
        Url::parse(&origin)
            .map_err(|e| Error::config(format!("invalid root_domain '{}': {e}", self.site.root_domain)))?;

        if self.site.locales.is_empty() {
            return Err(Error::config("locales must list at least one locale"));
        }

        if !self.site.locales.contains(&self.site.default_locale) {
            return Err(Error::config(format!(
                "default_locale '{}' is not in the supported locale set",
                self.site.default_locale
            )));
        }

        if let Some(id) = &self.site.analytics_id {
            if id.is_empty() {
                return Err(Error::config("analytics_id must not be empty when set"));
            }
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                root_domain: String::from("example.com"),
                locales: vec![String::from("en"), String::from("es"), String::from("ko")],
                default_locale: String::from("en"),
                analytics_id: None,
            },
            server: ServerConfig {
                bind_address: "0.0.0.0:8080".parse().expect("static address"),
                enable_cors: true,
                enable_request_logging: true,
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_locale_set_rejected() {
        let mut config = AppConfig::default();
        config.site.locales.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_locale_must_be_supported() {
        let mut config = AppConfig::default();
        config.site.default_locale = String::from("fr");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_root_domain_rejected() {
        let mut config = AppConfig::default();
        config.site.root_domain.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_root_domain_rejected() {
        let mut config = AppConfig::default();
        config.site.root_domain = String::from("not a domain");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_analytics_id_rejected() {
        let mut config = AppConfig::default();
        config.site.analytics_id = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.site.root_domain, config.site.root_domain);
        assert_eq!(parsed.site.locales, config.site.locales);
        assert!(parsed.site.analytics_id.is_none());
    }
}
