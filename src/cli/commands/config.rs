//! Config command - show current configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Only print the path of the config file that would be read
    #[arg(long)]
    pub path: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub loaded_from: Option<String>,
    pub application_id: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub request_timeout_sec: u64,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<()> {
    let config = &services.config;
    let config_file = XdgDirs::new().config_file().to_string_lossy().into_owned();

    if args.path {
        match format {
            OutputFormat::Human => println!("{config_file}"),
            OutputFormat::Json => {
                output::print_output(&serde_json::json!({ "config_file": config_file }), format)?
            }
        }
        return Ok(());
    }

    let response = ConfigResponse {
        config_file,
        loaded_from: config
            .source
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        application_id: config.algolia.application_id.clone(),
        api_key: config.redacted_api_key(),
        base_url: config.algolia.base_url.clone(),
        request_timeout_sec: config.algolia.request_timeout_sec,
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!(
                "  loaded_from: {}",
                response.loaded_from.as_deref().unwrap_or("(defaults)")
            );
            println!("  algolia:");
            println!(
                "    application_id: {}",
                colors::identifier(&response.application_id)
            );
            println!("    api_key: {}", colors::dim(&response.api_key));
            println!(
                "    base_url: {}",
                response.base_url.as_deref().unwrap_or("(default)")
            );
            println!(
                "    request_timeout_sec: {}",
                response.request_timeout_sec
            );
        }
        OutputFormat::Json => output::print_output(&response, format)?,
    }

    Ok(())
}
