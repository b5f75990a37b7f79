use crate::config::ServerConfig;
use crate::store::StringStore;
use std::sync::Arc;

/// Shared application state
///
/// Created once at startup and handed to the router as `Arc<ServerState>`;
/// nothing mutates it afterwards except the store's own interior
/// synchronization.
#[derive(Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Analyzed-string records, keyed by value digest (shared across requests)
    pub store: StringStore,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: StringStore::new(),
        }
    }
}
