//! Configuration management for indexcfg.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults for all settings.
//! Credentials may be empty here; the copy command decides what an
//! empty credential means.

use crate::core::error::{IndexCfgError, Result};
use crate::core::options::{OptionStore, API_KEY_OPTION, APPLICATION_ID_OPTION};
use crate::core::xdg::{XdgDirs, LOCAL_CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub algolia: AlgoliaConfig,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Algolia connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlgoliaConfig {
    /// Application ID
    #[serde(default)]
    pub application_id: String,

    /// Admin API key (needs the `addObject` ACL for copy operations)
    #[serde(default)]
    pub api_key: String,

    /// Override for the API host, e.g. a proxy or test server
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for AlgoliaConfig {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            api_key: String::new(),
            base_url: None,
            request_timeout_sec: default_request_timeout(),
        }
    }
}

impl AlgoliaConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_sec)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            IndexCfgError::ConfigError(format!("Failed to read config file {path:?}: {e}"))
        })?;

        let mut config: Config = toml::from_str(&contents)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. INDEXCFG_CONFIG_FILE env var (must exist, no fallback)
    /// 2. XDG config file (~/.config/indexcfg/config.toml)
    /// 3. ./indexcfg.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let xdg_config = xdg.config_dir.join("config.toml");
        let mut config = if let Some(explicit) = xdg.config_file_override() {
            Self::from_file(explicit)?
        } else if xdg_config.exists() {
            Self::from_file(xdg_config)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(app_id) = env::var("ALGOLIA_APPLICATION_ID") {
            self.algolia.application_id = app_id;
        }
        if let Ok(api_key) = env::var("ALGOLIA_API_KEY") {
            self.algolia.api_key = api_key;
        }
        if let Ok(base_url) = env::var("INDEXCFG_ALGOLIA_BASE_URL") {
            self.algolia.base_url = Some(base_url);
        }
        if let Ok(timeout) = env::var("INDEXCFG_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.algolia.request_timeout_sec = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.algolia.request_timeout_sec == 0 {
            return Err(IndexCfgError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if let Some(base_url) = &self.algolia.base_url {
            url::Url::parse(base_url).map_err(|e| {
                IndexCfgError::ConfigError(format!("Invalid base_url '{base_url}': {e}"))
            })?;
        }

        Ok(())
    }

    /// API key with everything but the last four characters masked
    pub fn redacted_api_key(&self) -> String {
        redact(&self.algolia.api_key)
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Source: {:?}", self.source);
        tracing::debug!("  Application ID: {}", self.algolia.application_id);
        tracing::debug!("  API key: {}", self.redacted_api_key());
        tracing::debug!("  Base URL: {:?}", self.algolia.base_url);
        tracing::debug!("  Request timeout: {}s", self.algolia.request_timeout_sec);
    }
}

impl OptionStore for Config {
    fn get_option(&self, name: &str) -> Option<String> {
        match name {
            APPLICATION_ID_OPTION => Some(self.algolia.application_id.clone()),
            API_KEY_OPTION => Some(self.algolia.api_key.clone()),
            _ => None,
        }
    }
}

fn redact(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
