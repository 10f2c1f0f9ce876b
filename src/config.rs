//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log ingestion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Directory containing the source log files
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Page size used when the request does not specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Hard cap; larger requested page sizes are clamped, not rejected
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_page_size() -> usize {
    50
}

fn default_max_page_size() -> usize {
    200
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("loglens").join("config.toml")),
            Some(PathBuf::from("/etc/loglens/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(log_dir) = std::env::var("LOGLENS_LOG_DIR") {
            self.ingest.log_dir = log_dir;
        }

        if let Ok(host) = std::env::var("LOGLENS_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("LOGLENS_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }
        if let Ok(size) = std::env::var("LOGLENS_DEFAULT_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.api.default_page_size = s;
            }
        }
        if let Ok(size) = std::env::var("LOGLENS_MAX_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.api.max_page_size = s;
            }
        }

        if let Ok(level) = std::env::var("LOGLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LOGLENS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Loglens Configuration
#
# Environment variables override these settings:
# - LOGLENS_LOG_DIR
# - LOGLENS_API_HOST
# - LOGLENS_API_PORT
# - LOGLENS_DEFAULT_PAGE_SIZE
# - LOGLENS_MAX_PAGE_SIZE
# - LOGLENS_LOG_LEVEL
# - LOGLENS_LOG_FORMAT

[ingest]
# Directory containing .log source files
log_dir = "logs"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8000

# Page size used when a request does not specify one
default_page_size = 50

# Hard cap on page_size; larger values are clamped
max_page_size = 200

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ingest.log_dir, "logs");
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.default_page_size, 50);
        assert_eq!(config.api.max_page_size, 200);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [ingest]
            log_dir = "/var/log/app"

            [api]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.ingest.log_dir, "/var/log/app");
        assert_eq!(config.api.port, 9000);
        // Unspecified sections and fields fall back to defaults
        assert_eq!(config.api.default_page_size, 50);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.max_page_size, 200);
    }
}
