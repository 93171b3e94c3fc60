//! Application state and shared resources.

use anyhow::Result;
use std::sync::Arc;

use image_store::ImageStore;

use crate::config::ApiConfig;
use crate::metrics::MetricsCollector;

/// Shared application state.
pub struct AppState {
    pub config: ApiConfig,
    pub store: ImageStore,
    pub metrics: Arc<MetricsCollector>,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let config = ApiConfig::from_env();

        let store = ImageStore::connect(&config.database_url).await?;
        store.migrate().await?;

        let metrics = Arc::new(MetricsCollector::new());

        Ok(Self {
            config,
            store,
            metrics,
        })
    }
}
