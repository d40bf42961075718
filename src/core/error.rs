//! Error types and error handling for indexcfg.
//!
//! A single error enum covers the whole command flow. The CLI adapter
//! maps each variant to a message and a process exit code.

use thiserror::Error;

/// Result type alias for indexcfg operations
pub type Result<T> = std::result::Result<T, IndexCfgError>;

/// Main error type for indexcfg
#[derive(Error, Debug)]
pub enum IndexCfgError {
    #[error("Missing App ID or API key")]
    MissingCredentials,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Search API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IndexCfgError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Reported through the fatal-error channel before any client exists
    pub fn is_fatal(&self) -> bool {
        matches!(self, IndexCfgError::MissingCredentials)
    }

    /// Check if this is a bad invocation (missing or empty argument)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, IndexCfgError::InvalidArgument(_))
    }

    /// Check if the failure came from the search service or the transport
    pub fn is_client_failure(&self) -> bool {
        matches!(self, IndexCfgError::Api { .. } | IndexCfgError::Http(_))
    }

    /// Stable category name used in JSON error output
    pub fn kind(&self) -> &'static str {
        if self.is_fatal() {
            "missing_credentials"
        } else if self.is_invalid_argument() {
            "invalid_argument"
        } else if self.is_client_failure() {
            "client"
        } else {
            "other"
        }
    }

    /// Process exit code for this error
    ///
    /// Usage errors exit with 2 (same as clap), everything else with 1.
    pub fn exit_code(&self) -> i32 {
        if self.is_invalid_argument() {
            2
        } else {
            1
        }
    }
}
