//! Shared router state.

use std::sync::Arc;

use insight_store::ConnectionManager;

/// State shared by every request: the connection manager and the URI it
/// connects with.
#[derive(Clone)]
pub struct AppState {
    connections: Arc<ConnectionManager>,
    mongo_uri: Option<Arc<str>>,
}

impl AppState {
    /// Create state around an existing connection manager.
    #[must_use]
    pub fn new(connections: Arc<ConnectionManager>, mongo_uri: Option<String>) -> Self {
        Self {
            connections,
            mongo_uri: mongo_uri.map(Arc::from),
        }
    }

    /// The shared connection manager.
    #[must_use]
    pub fn connections(&self) -> &ConnectionManager {
        &self.connections
    }

    /// The configured connection URI, if any.
    #[must_use]
    pub fn connection_uri(&self) -> Option<&str> {
        self.mongo_uri.as_deref()
    }
}
