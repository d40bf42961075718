//! Algolia REST client
//!
//! Implements the subset of the Algolia Search API used by indexcfg:
//! the index `operation` endpoint with `"operation": "copy"`.

use super::types::{ApiErrorBody, CopyIndexOptions, OperationRequest, TaskResponse};
use super::{SearchClient, SearchClientFactory};
use crate::core::config::AlgoliaConfig;
use crate::core::error::{IndexCfgError, Result};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Request};
use std::fmt;
use std::time::Duration;
use url::Url;

const APPLICATION_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";
const USER_AGENT: &str = concat!("indexcfg/", env!("CARGO_PKG_VERSION"));

/// Client for one Algolia application
#[derive(Clone)]
pub struct AlgoliaClient {
    http_client: HttpClient,
    base_url: Url,
    application_id: String,
    api_key: String,
}

impl AlgoliaClient {
    /// Create a client for the default host `https://{application_id}.algolia.net`
    ///
    /// The ID becomes part of the host name, so only ASCII letters and
    /// digits are accepted.
    pub fn new(application_id: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        if application_id.is_empty() || !application_id.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(IndexCfgError::ConfigError(format!(
                "Invalid application ID '{application_id}': expected ASCII letters and digits"
            )));
        }

        let base_url = Url::parse(&format!("https://{application_id}.algolia.net"))?;
        Self::with_base_url(base_url, application_id, api_key, timeout)
    }

    /// Create a client against an explicit host
    pub fn with_base_url(
        base_url: Url,
        application_id: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(IndexCfgError::ConfigError(format!(
                "Base URL cannot carry a path: {base_url}"
            )));
        }

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            application_id: application_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of `/1/indexes/{index}/operation`, index name percent-encoded
    fn operation_url(&self, index: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["1", "indexes", index, "operation"]);
        }
        url
    }

    /// Build the copy request without sending it
    pub fn copy_request(
        &self,
        source: &str,
        destination: &str,
        options: &CopyIndexOptions,
    ) -> Result<Request> {
        let body = OperationRequest::copy(destination, options);
        let request = self
            .http_client
            .post(self.operation_url(source))
            .header(APPLICATION_ID_HEADER, &self.application_id)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .build()?;
        Ok(request)
    }
}

impl fmt::Debug for AlgoliaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgoliaClient")
            .field("base_url", &self.base_url.as_str())
            .field("application_id", &self.application_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    async fn copy_index(
        &self,
        source: &str,
        destination: &str,
        options: &CopyIndexOptions,
    ) -> Result<TaskResponse> {
        let request = self.copy_request(source, destination, options)?;
        tracing::debug!(
            url = %request.url(),
            scope = %options.scope,
            "Sending copy operation"
        );

        let response = self.http_client.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            let task = response.json::<TaskResponse>().await?;
            tracing::debug!(task_id = task.task_id, "Copy operation accepted");
            return Ok(task);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        tracing::debug!(status = status.as_u16(), %message, "Copy operation rejected");

        Err(IndexCfgError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Factory building `AlgoliaClient`s from the `[algolia]` config table
#[derive(Debug, Clone)]
pub struct AlgoliaClientFactory {
    base_url: Option<String>,
    timeout: Duration,
}

impl AlgoliaClientFactory {
    pub fn new(config: &AlgoliaConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.request_timeout(),
        }
    }
}

impl SearchClientFactory for AlgoliaClientFactory {
    fn create(&self, application_id: &str, api_key: &str) -> Result<Box<dyn SearchClient>> {
        let client = match &self.base_url {
            Some(base_url) => AlgoliaClient::with_base_url(
                Url::parse(base_url)?,
                application_id,
                api_key,
                self.timeout,
            )?,
            None => AlgoliaClient::new(application_id, api_key, self.timeout)?,
        };
        Ok(Box::new(client))
    }
}
