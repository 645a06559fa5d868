//! Principal extractors for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use plinth_core::error::CoreError;

use crate::auth::context::ApiUser;
use crate::error::ApiError;
use crate::state::AppState;

/// The current principal, or `None` when the request carries no valid
/// credential. Never rejects.
///
/// ```ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) -> Response {
///     match user { ... }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<ApiUser>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.controller.api_user(&parts.headers)))
    }
}

/// The current principal; rejects with 401 when the request carries no
/// valid credential.
#[derive(Debug, Clone)]
pub struct RequireUser(pub ApiUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .controller
            .api_user(&parts.headers)
            .map(RequireUser)
            .ok_or_else(|| {
                ApiError::Core(CoreError::Unauthorized(
                    "Missing or invalid Bearer token".into(),
                ))
            })
    }
}
