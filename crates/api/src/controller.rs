//! The API controller: the per-request orchestration every handler builds on.
//!
//! The controller owns the four collaborators (security context,
//! serializer, validator, renderer) via constructor injection and exposes
//! the operations handlers compose: principal lookup, method-dependent
//! payload extraction, a validation pass, and envelope rendering. It is
//! stateless across requests and cheap to share behind an `Arc`.

use std::sync::Arc;

use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use plinth_core::error::CoreError;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use validator::Validate;

use crate::auth::context::{ApiUser, AuthToken, JwtSecurityContext, SecurityContext};
use crate::auth::jwt::JwtConfig;
use crate::envelope::{Envelope, JsonRenderer, ResponseRenderer};
use crate::error::ApiError;
use crate::extract::{parse_query, JsonSerializer, PayloadSerializer, RequestPayload};
use crate::validate::{RequestValidator, RuleValidator};

pub struct ApiController {
    security: Arc<dyn SecurityContext>,
    serializer: Arc<dyn PayloadSerializer>,
    validator: Arc<dyn RequestValidator>,
    renderer: Arc<dyn ResponseRenderer>,
}

impl ApiController {
    pub fn new(
        security: Arc<dyn SecurityContext>,
        serializer: Arc<dyn PayloadSerializer>,
        validator: Arc<dyn RequestValidator>,
        renderer: Arc<dyn ResponseRenderer>,
    ) -> Self {
        Self {
            security,
            serializer,
            validator,
            renderer,
        }
    }

    /// Production wiring: JWT security, JSON serialization, derive-rule
    /// validation, JSON envelope rendering.
    pub fn from_config(jwt: JwtConfig) -> Self {
        Self::new(
            Arc::new(JwtSecurityContext::new(jwt)),
            Arc::new(JsonSerializer),
            Arc::new(RuleValidator),
            Arc::new(JsonRenderer),
        )
    }

    /// The authenticated principal of the current request, if any.
    ///
    /// Absence (no credential, invalid credential) is a normal outcome,
    /// never an error.
    pub fn api_user(&self, headers: &HeaderMap) -> Option<ApiUser> {
        self.security.token(headers).map(AuthToken::into_user)
    }

    /// Extract the raw request payload.
    ///
    /// POST/PUT/DELETE read the body; GET reads the query string. Any
    /// unrecognized verb also falls back to the query string -- kept for
    /// wire compatibility with clients using non-standard methods.
    pub fn request_data(&self, method: &Method, uri: &Uri, body: &str) -> RequestPayload {
        match method.as_str() {
            "POST" | "PUT" | "DELETE" => RequestPayload::Body(body.to_owned()),
            _ => RequestPayload::Query(parse_query(uri)),
        }
    }

    /// Extract the request payload and deserialize it into `T` via the
    /// serializer collaborator.
    ///
    /// Body methods feed the raw body through the serializer; query-sourced
    /// methods feed the query mapping re-encoded as a JSON object. The
    /// serializer's value converts into `T` unchanged.
    pub fn typed_request_data<T: DeserializeOwned>(
        &self,
        method: &Method,
        uri: &Uri,
        body: &str,
    ) -> Result<T, ApiError> {
        let raw = match self.request_data(method, uri, body) {
            RequestPayload::Body(raw) => raw,
            RequestPayload::Query(map) => serde_json::to_string(&map)
                .map_err(|e| CoreError::Internal(format!("Query re-encoding failed: {e}")))?,
        };

        let value = self.serializer.deserialize(&raw)?;
        serde_json::from_value(value)
            .map_err(|e| CoreError::Deserialization(e.to_string()).into())
    }

    /// Run the validation collaborator against `subject`.
    ///
    /// A non-empty violation set fails with the full set attached; the
    /// caller decides how to surface it.
    pub fn validate(&self, subject: &dyn Validate) -> Result<(), ApiError> {
        let violations = self.validator.validate(subject);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(violations).into())
        }
    }

    /// An empty JSON response (`{}`) pre-configured with the status code.
    pub fn create_response(&self, status: StatusCode) -> Response {
        (status, Json(json!({}))).into_response()
    }

    /// Merge the `ok` flag into the body mapping and delegate to the
    /// renderer collaborator.
    pub fn render_response(&self, data: Map<String, Value>, ok: bool, status: StatusCode) -> Response {
        self.renderer.render(Envelope::new(ok, data), status)
    }

    /// Success response: `{ ok: true, metadata?, result: data }`.
    ///
    /// `metadata` is omitted when empty; `headers` are applied on top of
    /// the rendered response.
    pub fn render_ok(
        &self,
        data: Value,
        status: StatusCode,
        headers: HeaderMap,
        metadata: Map<String, Value>,
    ) -> Response {
        let mut body = Map::new();
        if !metadata.is_empty() {
            body.insert("metadata".to_owned(), Value::Object(metadata));
        }
        body.insert("result".to_owned(), data);

        let mut response = self.render_response(body, true, status);
        response.headers_mut().extend(headers);
        response
    }

    /// Error response: `{ ok: false, error: message }`.
    pub fn render_error(&self, status: StatusCode, message: &str) -> Response {
        let mut body = Map::new();
        body.insert("error".to_owned(), Value::String(message.to_owned()));
        self.render_response(body, false, status)
    }
}
