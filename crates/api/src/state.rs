use std::sync::Arc;

use crate::config::ServerConfig;
use crate::controller::ApiController;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// The API controller handlers compose with.
    pub controller: Arc<ApiController>,
}
