use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plinth_core::error::CoreError;
use plinth_core::validation::ViolationList;
use serde_json::Value;

use crate::envelope::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform error envelope
/// `{ ok: false, error: ... }` (with a `violations` array for validation
/// failures).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `plinth_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, violations): (StatusCode, String, Option<ViolationList>) =
            match &self {
                // --- CoreError variants ---
                ApiError::Core(core) => match core {
                    CoreError::Validation(list) => (
                        StatusCode::BAD_REQUEST,
                        "Validation failed".to_string(),
                        Some(list.clone()),
                    ),
                    CoreError::Deserialization(msg) => {
                        (StatusCode::BAD_REQUEST, msg.clone(), None)
                    }
                    CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
                    CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
                    CoreError::Internal(msg) => {
                        tracing::error!(error = %msg, "Internal core error");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "An internal error occurred".to_string(),
                            None,
                        )
                    }
                },

                // --- HTTP-specific errors ---
                ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
                ApiError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            };

        let mut envelope = Envelope::failure(message);
        if let Some(list) = violations {
            envelope.body.insert(
                "violations".to_owned(),
                serde_json::to_value(&list).unwrap_or(Value::Null),
            );
        }

        (status, Json(envelope)).into_response()
    }
}
