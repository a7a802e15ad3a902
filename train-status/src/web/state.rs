//! Application state for the web layer.

use std::sync::Arc;

use crate::status::StatusService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Status lookup service
    pub status: Arc<StatusService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(status: StatusService) -> Self {
        Self {
            status: Arc::new(status),
        }
    }
}
