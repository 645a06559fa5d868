//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "ok": ..., ... }` envelope: success responses
//! carry a `result` key (plus `metadata` when supplied), error responses
//! carry an `error` key. Use [`Envelope`] instead of ad-hoc
//! `serde_json::json!` blocks to get consistent serialization.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

/// The uniform response envelope: an `ok` flag merged with the body mapping.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    /// Whether the request succeeded.
    pub ok: bool,
    /// Remaining envelope keys (`result`, `error`, `metadata`, ...),
    /// serialized alongside `ok`.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl Envelope {
    pub fn new(ok: bool, body: Map<String, Value>) -> Self {
        Self { ok, body }
    }

    /// Success envelope: `{ ok: true, metadata?, result }`.
    ///
    /// `metadata` is omitted when empty.
    pub fn success(result: Value, metadata: Map<String, Value>) -> Self {
        let mut body = Map::new();
        if !metadata.is_empty() {
            body.insert("metadata".to_owned(), Value::Object(metadata));
        }
        body.insert("result".to_owned(), result);
        Self::new(true, body)
    }

    /// Error envelope: `{ ok: false, error }`.
    pub fn failure(message: impl Into<String>) -> Self {
        let mut body = Map::new();
        body.insert("error".to_owned(), Value::String(message.into()));
        Self::new(false, body)
    }
}

/// Rendering collaborator: turns an envelope into the final HTTP response.
pub trait ResponseRenderer: Send + Sync {
    fn render(&self, envelope: Envelope, status: StatusCode) -> Response;
}

/// Default renderer: serializes the envelope as a JSON body at the given
/// status code.
pub struct JsonRenderer;

impl ResponseRenderer for JsonRenderer {
    fn render(&self, envelope: Envelope, status: StatusCode) -> Response {
        (status, Json(envelope)).into_response()
    }
}
