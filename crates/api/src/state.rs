use std::sync::Arc;

use palmlens_storage::Storage;

use crate::config::ServerConfig;
use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Entity storage, injected at startup.
    pub storage: Arc<dyn Storage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Uploaded-file persistence.
    pub uploads: Arc<UploadStore>,
}
