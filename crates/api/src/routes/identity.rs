//! Route definitions for the identity endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::identity;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET /whoami   -> whoami (public)
/// GET /profile  -> profile (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/whoami", get(identity::whoami))
        .route("/profile", get(identity::profile))
}
