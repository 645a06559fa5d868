//! The security context collaborator: request credentials and the
//! authenticated principal.
//!
//! Absence of a principal is a normal outcome at this layer, not an error:
//! a missing header, a malformed header, and an invalid or expired token
//! all yield `None`. Handlers that require authentication reject via the
//! extractors in `middleware::auth`.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use serde::Serialize;

use crate::auth::jwt::{validate_token, JwtConfig};

/// The authenticated principal attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiUser {
    /// Stable identifier of the principal (the token's `sub` claim).
    pub subject: String,
    /// The principal's role name (e.g. `"admin"`, `"user"`).
    pub role: String,
}

/// A validated credential carrying the principal it authenticates.
#[derive(Debug, Clone)]
pub struct AuthToken {
    user: ApiUser,
}

impl AuthToken {
    pub fn new(user: ApiUser) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &ApiUser {
        &self.user
    }

    pub fn into_user(self) -> ApiUser {
        self.user
    }
}

/// Security collaborator: resolves the current request's credential.
pub trait SecurityContext: Send + Sync {
    /// The credential presented by the current request, if any.
    fn token(&self, headers: &HeaderMap) -> Option<AuthToken>;
}

/// Production security context backed by HS256 JWTs in the
/// `Authorization: Bearer <token>` header.
pub struct JwtSecurityContext {
    config: JwtConfig,
}

impl JwtSecurityContext {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl SecurityContext for JwtSecurityContext {
    fn token(&self, headers: &HeaderMap) -> Option<AuthToken> {
        let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = header.strip_prefix("Bearer ")?;
        let claims = validate_token(token, &self.config).ok()?;

        Some(AuthToken::new(ApiUser {
            subject: claims.sub,
            role: claims.role,
        }))
    }
}
