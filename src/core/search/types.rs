//! Wire types for index operations

use crate::core::scope::ScopeSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options for a copy operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyIndexOptions {
    pub scope: ScopeSet,
}

/// Body of `POST /1/indexes/{index}/operation`
#[derive(Debug, Serialize)]
pub struct OperationRequest<'a> {
    pub operation: &'static str,
    pub destination: &'a str,
    #[serde(skip_serializing_if = "scope_is_empty")]
    pub scope: &'a ScopeSet,
}

fn scope_is_empty(scope: &&ScopeSet) -> bool {
    scope.is_empty()
}

impl<'a> OperationRequest<'a> {
    pub fn copy(destination: &'a str, options: &'a CopyIndexOptions) -> Self {
        Self {
            operation: "copy",
            destination,
            scope: &options.scope,
        }
    }
}

/// Asynchronous task handle returned by write operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    #[serde(rename = "taskID")]
    pub task_id: u64,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
