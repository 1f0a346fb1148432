use std::sync::Arc;

use formbuilder_storage::ImageStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formbuilder_db::DbPool,
    /// Server configuration, built once in `main`.
    pub config: Arc<ServerConfig>,
    /// Image-upload client for the external storage provider.
    pub images: Arc<ImageStore>,
}
