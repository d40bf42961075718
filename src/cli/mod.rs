//! CLI adapter for indexcfg
//!
//! Parses arguments with clap, builds the services from configuration
//! and renders command outcomes. All domain logic lives in `core/`.
//!
//! # Architecture
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// indexcfg - copy Algolia index configuration
///
/// Copies settings, synonyms and/or rules from one index to another.
/// Credentials come from the config file or the ALGOLIA_APPLICATION_ID
/// and ALGOLIA_API_KEY environment variables.
#[derive(Parser, Debug)]
#[command(name = "indexcfg")]
#[command(author = "WebDevStudios")]
#[command(version)]
#[command(about = "Copy Algolia index configuration", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log line format on stderr
    #[arg(long, global = true, env = "INDEXCFG_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Format of log lines written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Plain text lines (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy settings, synonyms and/or rules from one index to another
    ///
    /// Example:
    ///
    ///   indexcfg copy_config --from=products_dev --to=products_prod --settings
    #[command(name = "copy_config", visible_alias = "copy-config")]
    CopyConfig(commands::CopyConfigArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  indexcfg completions bash > ~/.local/share/bash-completion/completions/indexcfg
    ///   zsh:   indexcfg completions zsh > ~/.zfunc/_indexcfg
    ///   fish:  indexcfg completions fish > ~/.config/fish/completions/indexcfg.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<()> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::CopyConfig(args) => {
            commands::copy_config::execute(args, &services, cli.format).await?;
            Ok(())
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
