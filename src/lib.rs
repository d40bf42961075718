//! indexcfg - copy Algolia index configuration
//!
//! Copies settings, synonyms and/or rules from one Algolia index to
//! another with a single copy operation.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, options, xdg
//!   - scope (settings / synonyms / rules)
//!   - search (client traits, Algolia REST client)
//!   - copy_config (the command)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::copy_config::{CopyConfigCommand, CopyConfigRequest, CopyOutcome};
pub use crate::core::error::{IndexCfgError, Result};
pub use crate::core::scope::{ScopeSet, ScopeTag};
pub use crate::core::services::Services;
