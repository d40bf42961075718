//! XDG Base Directory Support
//!
//! Resolves where indexcfg looks for its configuration file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// Legacy config file in the working directory
pub const LOCAL_CONFIG_FILE: &str = "indexcfg.toml";

/// XDG directory structure for indexcfg
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. INDEXCFG_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Resolve config directory
    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("INDEXCFG_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("indexcfg");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("indexcfg")
    }

    /// Config file named by INDEXCFG_CONFIG_FILE, if set
    pub fn config_file_override(&self) -> Option<PathBuf> {
        env::var_os("INDEXCFG_CONFIG_FILE").map(PathBuf::from)
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // Explicit override wins
        self.config_file_override()
            .unwrap_or_else(|| self.config_dir.join("config.toml"))
    }

    /// Log the resolved paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
