pub mod echo;
pub mod health;
pub mod identity;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /echo      validated echo (public)
/// GET  /whoami    current principal (public)
/// GET  /profile   principal profile (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(echo::router()).merge(identity::router())
}
