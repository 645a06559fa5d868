//! Handlers for the `/echo` resource.
//!
//! The echo endpoint is the reference consumer of the controller layer:
//! typed payload extraction, a validation pass, and a success envelope
//! with metadata.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde::Deserialize;
use serde_json::{json, Map};
use validator::Validate;

use crate::error::ApiResult;
use crate::extract::Payload;
use crate::state::AppState;

/// Request body for `POST /echo`.
#[derive(Debug, Deserialize, Validate)]
pub struct EchoRequest {
    #[validate(length(min = 1, max = 280, message = "must be between 1 and 280 characters"))]
    pub message: String,
}

/// POST /api/v1/echo
///
/// Validate the payload and echo it back, with the message length as
/// envelope metadata.
pub async fn echo(
    State(state): State<AppState>,
    Payload(input): Payload<EchoRequest>,
) -> ApiResult<Response> {
    state.controller.validate(&input)?;

    let mut metadata = Map::new();
    metadata.insert("length".to_owned(), json!(input.message.len()));

    Ok(state.controller.render_ok(
        json!({ "message": input.message }),
        StatusCode::OK,
        HeaderMap::new(),
        metadata,
    ))
}
