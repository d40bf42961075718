//! Unified service container for indexcfg
//!
//! Bundles the injected collaborators of the copy command: where
//! credentials come from and how search clients are built.

use crate::core::config::Config;
use crate::core::options::OptionStore;
use crate::core::search::{AlgoliaClientFactory, SearchClientFactory};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Named options (credentials)
    pub options: Arc<dyn OptionStore>,

    /// Builds search clients from credentials
    pub clients: Arc<dyn SearchClientFactory>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create production services from configuration
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let clients = Arc::new(AlgoliaClientFactory::new(&config.algolia));

        Self {
            options: Arc::clone(&config) as Arc<dyn OptionStore>,
            clients,
            config,
        }
    }

    /// Create services with explicit collaborators
    pub fn with_parts(
        config: Config,
        options: Arc<dyn OptionStore>,
        clients: Arc<dyn SearchClientFactory>,
    ) -> Self {
        Self {
            options,
            clients,
            config: Arc::new(config),
        }
    }
}
