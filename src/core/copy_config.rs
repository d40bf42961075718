//! Copy index configuration between two indices
//!
//! Reads credentials from the option store, validates the source and
//! destination names, and issues a single copy operation limited to
//! the requested scope.

use crate::core::error::{IndexCfgError, Result};
use crate::core::options::{OptionStore, API_KEY_OPTION, APPLICATION_ID_OPTION};
use crate::core::scope::ScopeSet;
use crate::core::search::{CopyIndexOptions, SearchClientFactory, TaskResponse};
use crate::core::services::Services;

/// Message carried by the invalid-argument error
pub const MISSING_INDEX_NAMES: &str = "--from and --to arguments are required";

/// Warning shown when no scope flag is set
pub const NOTHING_TO_COPY: &str = "Nothing to copy, use --settings, --synonyms or --rules.";

/// Parsed command input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyConfigRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub settings: bool,
    pub synonyms: bool,
    pub rules: bool,
}

/// Result of a successful invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied {
        scope: ScopeSet,
        from: String,
        to: String,
        task: TaskResponse,
    },
    NothingToCopy,
}

impl CopyOutcome {
    /// The one line reported to the user
    pub fn message(&self) -> String {
        match self {
            CopyOutcome::Copied {
                scope, from, to, ..
            } => format!("Copied {scope} from {from} to {to}"),
            CopyOutcome::NothingToCopy => NOTHING_TO_COPY.to_string(),
        }
    }
}

/// The copy-config command with its injected collaborators
pub struct CopyConfigCommand<'a> {
    options: &'a dyn OptionStore,
    clients: &'a dyn SearchClientFactory,
}

impl<'a> CopyConfigCommand<'a> {
    pub fn new(options: &'a dyn OptionStore, clients: &'a dyn SearchClientFactory) -> Self {
        Self { options, clients }
    }

    pub fn from_services(services: &'a Services) -> Self {
        Self::new(services.options.as_ref(), services.clients.as_ref())
    }

    /// Run the command
    ///
    /// Client failures are returned unchanged.
    pub async fn execute(&self, request: &CopyConfigRequest) -> Result<CopyOutcome> {
        let application_id = self.options.get_option_or(APPLICATION_ID_OPTION, "");
        let api_key = self.options.get_option_or(API_KEY_OPTION, "");

        if application_id.is_empty() || api_key.is_empty() {
            return Err(IndexCfgError::MissingCredentials);
        }

        let client = self.clients.create(&application_id, &api_key)?;

        let (from, to) = match (non_empty(&request.from), non_empty(&request.to)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                return Err(IndexCfgError::InvalidArgument(
                    MISSING_INDEX_NAMES.to_string(),
                ))
            }
        };

        let scope = ScopeSet::from_flags(request.settings, request.synonyms, request.rules);
        if scope.is_empty() {
            tracing::debug!(from, to, "No scope flags given, skipping copy");
            return Ok(CopyOutcome::NothingToCopy);
        }

        tracing::info!(from, to, scope = %scope, "Copying index configuration");
        let options = CopyIndexOptions { scope };
        let task = client.copy_index(from, to, &options).await?;

        Ok(CopyOutcome::Copied {
            scope: options.scope,
            from: from.to_string(),
            to: to.to_string(),
            task,
        })
    }
}

/// Only a missing or empty name is rejected; "0" is a valid index name.
/// Scope flags are presence-only switches and cannot be given a value.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
