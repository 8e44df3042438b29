//! Shared application state.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::platform::PlatformClient;

/// State handed to every route handler. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: AdminConfig,
    platform: PlatformClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminConfig, platform: PlatformClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, platform }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn platform(&self) -> &PlatformClient {
        &self.inner.platform
    }
}
