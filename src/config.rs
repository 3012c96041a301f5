//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::DEFAULT_POLICY_URL;
use crate::scoring::SelectionLimits;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub recommend: RecommendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built frontend (served as a fallback route)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Allowed CORS origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "covermatch-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Policy catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_policies_csv")]
    pub policies_csv: String,

    /// Link used for policies without a URL column value
    #[serde(default = "default_policy_url")]
    pub default_url: String,
}

fn default_policies_csv() -> String {
    "policies.csv".to_string()
}

fn default_policy_url() -> String {
    DEFAULT_POLICY_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            policies_csv: default_policies_csv(),
            default_url: default_policy_url(),
        }
    }
}

/// Recommendation list sizes
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_primary_count")]
    pub primary_count: usize,

    #[serde(default = "default_secondary_count")]
    pub secondary_count: usize,
}

fn default_primary_count() -> usize {
    5
}

fn default_secondary_count() -> usize {
    10
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            primary_count: default_primary_count(),
            secondary_count: default_secondary_count(),
        }
    }
}

impl RecommendConfig {
    pub fn limits(&self) -> SelectionLimits {
        SelectionLimits {
            primary: self.primary_count,
            secondary: self.secondary_count,
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

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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
            dirs::config_dir().map(|p| p.join("covermatch").join("config.toml")),
            Some(PathBuf::from("/etc/covermatch/config.toml")),
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
        // Server overrides
        if let Ok(host) = std::env::var("COVERMATCH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("COVERMATCH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(dir) = std::env::var("COVERMATCH_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        // Catalog overrides
        if let Ok(csv) = std::env::var("COVERMATCH_POLICIES_CSV") {
            self.catalog.policies_csv = csv;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("COVERMATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COVERMATCH_LOG_FORMAT") {
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
    r#"# CoverMatch Configuration
#
# Environment variables override these settings:
# - COVERMATCH_HOST
# - COVERMATCH_PORT
# - COVERMATCH_STATIC_DIR
# - COVERMATCH_POLICIES_CSV
# - COVERMATCH_LOG_LEVEL
# - COVERMATCH_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 5000

# Built frontend served at / (trunk build output)
static_dir = "covermatch-ui/dist"

# Allowed CORS origins (empty = allow any)
cors_origins = []

[catalog]
# Policy catalog CSV (brand,policy,price,tags,remarks,coverage,url)
policies_csv = "policies.csv"

# Link for policies without a url value
default_url = "https://www.policybazaar.com/health-insurance/"

[recommend]
# Policies shown up front
primary_count = 5

# Policies behind "Show More Policies"
secondary_count = 10

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
