//! Search service client
//!
//! The copy command only sees the `SearchClient` and
//! `SearchClientFactory` traits. `AlgoliaClient` is the production
//! implementation talking to the Algolia REST API.

mod algolia;
mod types;

pub use algolia::{AlgoliaClient, AlgoliaClientFactory};
pub use types::{CopyIndexOptions, OperationRequest, TaskResponse};

use crate::core::error::Result;
use async_trait::async_trait;

/// Operations the copy command needs from a search service
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Copy parts of `source` onto `destination`
    ///
    /// One round trip. Failures are returned as-is, never retried.
    async fn copy_index(
        &self,
        source: &str,
        destination: &str,
        options: &CopyIndexOptions,
    ) -> Result<TaskResponse>;
}

/// Builds clients from an application ID and API key
pub trait SearchClientFactory: Send + Sync {
    fn create(&self, application_id: &str, api_key: &str) -> Result<Box<dyn SearchClient>>;
}
