//! Request payload extraction.
//!
//! The payload source depends on the HTTP method: GET (and any
//! unrecognized verb) reads the query string, POST/PUT/DELETE read the
//! body. [`RequestPayload`] is the raw form; [`Payload`] runs the raw form
//! through the serializer collaborator into a typed value.

use std::collections::BTreeMap;

use axum::extract::{FromRequest, Query, Request};
use axum::http::Uri;
use plinth_core::error::CoreError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Serialization collaborator: parses a textual payload into a JSON value.
pub trait PayloadSerializer: Send + Sync {
    fn deserialize(&self, raw: &str) -> Result<Value, CoreError>;
}

/// Production serializer for `application/json` payloads.
pub struct JsonSerializer;

impl PayloadSerializer for JsonSerializer {
    fn deserialize(&self, raw: &str) -> Result<Value, CoreError> {
        serde_json::from_str(raw).map_err(|e| CoreError::Deserialization(e.to_string()))
    }
}

/// The extracted request payload, before any typed deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
    /// Parsed query-string mapping (GET and unrecognized methods).
    Query(BTreeMap<String, String>),
    /// Raw body text (POST, PUT, DELETE).
    Body(String),
}

/// Parse the query string of a URI into a key-value mapping.
///
/// Repeated keys keep the last value. An unparsable query string yields an
/// empty mapping.
pub(crate) fn parse_query(uri: &Uri) -> BTreeMap<String, String> {
    Query::<BTreeMap<String, String>>::try_from_uri(uri)
        .map(|q| q.0)
        .unwrap_or_default()
}

impl FromRequest<AppState> for RequestPayload {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let body = String::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Unreadable request body: {e}")))?;

        Ok(state.controller.request_data(&method, &uri, &body))
    }
}

/// Typed payload extractor: the raw payload passed through the serializer
/// collaborator into `T`.
///
/// Rejection is the deserialization error response.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T: DeserializeOwned> FromRequest<AppState> for Payload<T> {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let body = String::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Unreadable request body: {e}")))?;

        state
            .controller
            .typed_request_data(&method, &uri, &body)
            .map(Payload)
    }
}
