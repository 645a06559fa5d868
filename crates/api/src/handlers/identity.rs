//! Handlers for the identity endpoints (current principal lookup).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde_json::{json, Map};

use crate::middleware::auth::{CurrentUser, RequireUser};
use crate::state::AppState;

/// GET /api/v1/whoami
///
/// Report the current principal, or a 401 error envelope when the request
/// carries no valid credential. Absence is resolved here rather than by a
/// rejecting extractor, so the endpoint always answers.
pub async fn whoami(CurrentUser(user): CurrentUser, State(state): State<AppState>) -> Response {
    match user {
        Some(user) => state.controller.render_ok(
            json!({ "user": user }),
            StatusCode::OK,
            HeaderMap::new(),
            Map::new(),
        ),
        None => state
            .controller
            .render_error(StatusCode::UNAUTHORIZED, "No authenticated principal"),
    }
}

/// GET /api/v1/profile
///
/// The authenticated principal's profile as carried by its token claims.
/// Rejects with 401 when unauthenticated.
pub async fn profile(RequireUser(user): RequireUser, State(state): State<AppState>) -> Response {
    let mut metadata = Map::new();
    metadata.insert("role".to_owned(), json!(user.role));

    state.controller.render_ok(
        json!({ "subject": user.subject }),
        StatusCode::OK,
        HeaderMap::new(),
        metadata,
    )
}
