// Recording search client used in place of the Algolia client

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use indexcfg::core::error::{IndexCfgError, Result};
use indexcfg::core::search::{
    CopyIndexOptions, SearchClient, SearchClientFactory, TaskResponse,
};
use indexcfg::ScopeTag;
use std::sync::{Arc, Mutex};

/// One recorded `copy_index` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCall {
    pub source: String,
    pub destination: String,
    pub scope: Vec<ScopeTag>,
}

/// Factory that records every client it builds and every call made
#[derive(Default)]
pub struct RecordingFactory {
    created: Mutex<Vec<(String, String)>>,
    calls: Arc<Mutex<Vec<CopyCall>>>,
    failure: Option<(u16, String)>,
}

#[allow(dead_code)]
impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clients built by this factory fail every copy with an API error
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    /// Credentials passed to `create`, in order
    pub fn created(&self) -> Vec<(String, String)> {
        self.created.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<CopyCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchClientFactory for RecordingFactory {
    fn create(&self, application_id: &str, api_key: &str) -> Result<Box<dyn SearchClient>> {
        self.created
            .lock()
            .unwrap()
            .push((application_id.to_string(), api_key.to_string()));

        Ok(Box::new(RecordingClient {
            calls: Arc::clone(&self.calls),
            failure: self.failure.clone(),
        }))
    }
}

struct RecordingClient {
    calls: Arc<Mutex<Vec<CopyCall>>>,
    failure: Option<(u16, String)>,
}

#[async_trait]
impl SearchClient for RecordingClient {
    async fn copy_index(
        &self,
        source: &str,
        destination: &str,
        options: &CopyIndexOptions,
    ) -> Result<TaskResponse> {
        self.calls.lock().unwrap().push(CopyCall {
            source: source.to_string(),
            destination: destination.to_string(),
            scope: options.scope.tags().to_vec(),
        });

        if let Some((status, message)) = &self.failure {
            return Err(IndexCfgError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        Ok(TaskResponse {
            task_id: 42,
            updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap(),
        })
    }
}
