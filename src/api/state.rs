//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::catalog::CatalogStore;
use crate::config::ServerConfig;
use crate::scoring::SelectionLimits;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// File-backed policy catalog
    pub catalog: Arc<CatalogStore>,
    /// Size of the primary and "more" recommendation lists
    pub limits: SelectionLimits,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogStore>, limits: SelectionLimits, config: ServerConfig) -> Self {
        Self {
            catalog,
            limits,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
