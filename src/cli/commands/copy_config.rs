//! Copy-config command - copy settings, synonyms and rules between indices

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::copy_config::{CopyConfigCommand, CopyConfigRequest, CopyOutcome};
use crate::core::error::Result;
use crate::core::scope::ScopeSet;
use crate::core::services::Services;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the copy_config command
///
/// `--from` and `--to` are optional here so that a missing name is
/// reported by the command itself.
#[derive(Args, Debug, Clone, Default)]
pub struct CopyConfigArgs {
    /// Source index name
    #[arg(long, value_name = "INDEX")]
    pub from: Option<String>,

    /// Destination index name
    #[arg(long, value_name = "INDEX")]
    pub to: Option<String>,

    /// Copy index settings
    #[arg(long)]
    pub settings: bool,

    /// Copy synonyms
    #[arg(long)]
    pub synonyms: bool,

    /// Copy query rules
    #[arg(long)]
    pub rules: bool,
}

impl From<CopyConfigArgs> for CopyConfigRequest {
    fn from(args: CopyConfigArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            settings: args.settings,
            synonyms: args.synonyms,
            rules: args.rules,
        }
    }
}

/// JSON rendering of the outcome
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyConfigResponse {
    Copied {
        message: String,
        scope: ScopeSet,
        from: String,
        to: String,
        task_id: u64,
        updated_at: DateTime<Utc>,
    },
    NothingToCopy {
        message: String,
    },
}

impl From<&CopyOutcome> for CopyConfigResponse {
    fn from(outcome: &CopyOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            CopyOutcome::Copied {
                scope,
                from,
                to,
                task,
            } => CopyConfigResponse::Copied {
                message,
                scope: scope.clone(),
                from: from.clone(),
                to: to.clone(),
                task_id: task.task_id,
                updated_at: task.updated_at,
            },
            CopyOutcome::NothingToCopy => CopyConfigResponse::NothingToCopy { message },
        }
    }
}

/// Execute the copy_config command
pub async fn execute(
    args: CopyConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<CopyOutcome> {
    let request = CopyConfigRequest::from(args);
    let outcome = CopyConfigCommand::from_services(services)
        .execute(&request)
        .await?;

    match format {
        OutputFormat::Human => match &outcome {
            CopyOutcome::Copied { .. } => output::print_success(&outcome.message()),
            CopyOutcome::NothingToCopy => output::print_warning(&outcome.message()),
        },
        OutputFormat::Json => {
            output::print_output(&CopyConfigResponse::from(&outcome), format)?;
        }
    }

    Ok(outcome)
}
