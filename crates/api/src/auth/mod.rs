//! Password hashing and JWT-based request authentication.

pub mod jwt;
pub mod password;

use axum::http::HeaderMap;
use hallyu_core::types::EntityId;

use jwt::{validate_token, JwtConfig};

/// Authenticated caller, attached to a GraphQL request's context data by the
/// HTTP handler when a valid Bearer token is present.
#[derive(Debug, Clone, Copy)]
pub struct AuthSession {
    pub user_id: EntityId,
}

/// Extract an [`AuthSession`] from the `Authorization` header, if present.
///
/// Invalid or expired tokens are treated the same as no token; resolvers
/// that require authentication reject the anonymous request instead.
pub fn session_from_headers(headers: &HeaderMap, config: &JwtConfig) -> Option<AuthSession> {
    let header = headers.get("authorization")?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    let claims = validate_token(token, config).ok()?;
    Some(AuthSession {
        user_id: claims.sub,
    })
}
