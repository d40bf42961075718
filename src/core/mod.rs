//! Core domain logic (protocol-agnostic)
//!
//! Nothing here knows about clap or terminal output.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **options**: Named option lookup (credentials)
//! - **scope**: Scope tags and the ordered scope set
//! - **search**: Search client traits and the Algolia client
//! - **copy_config**: The copy-config command
//! - **services**: Service container
//! - **xdg**: XDG directory handling

pub mod config;
pub mod copy_config;
pub mod error;
pub mod options;
pub mod scope;
pub mod search;
pub mod services;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use copy_config::{CopyConfigCommand, CopyConfigRequest, CopyOutcome};
pub use error::{IndexCfgError, Result};
pub use services::Services;
