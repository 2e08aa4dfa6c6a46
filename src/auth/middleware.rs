//! Authentication Middleware
//! Mission: Attach a verified identity to requests that carry a token

use crate::auth::{jwt::TokenService, models::Identity};
use crate::error::ApiError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Best-effort identity attach.
///
/// No `Authorization` header: the request continues anonymously, and public
/// routes compose with the same layer. A header of the form
/// `<scheme> <token>` is verified and the resulting [`Identity`] is stored in
/// the request extensions. A header that is present but unusable ends the
/// request with 401.
pub async fn attach_identity(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(header) = req.headers().get(AUTHORIZATION) else {
        return Ok(next.run(req).await);
    };

    let value = header
        .to_str()
        .map_err(|_| ApiError::Authentication("Malformed authorization header"))?;
    let token = bearer_token(value)
        .ok_or(ApiError::Authentication("Malformed authorization header"))?;

    let claims = tokens.verify(token).map_err(|e| {
        debug!("Token rejected: {}", e);
        ApiError::Authentication("Invalid or expired token")
    })?;
    let identity = Identity::from_claims(&claims)
        .ok_or(ApiError::Authentication("Invalid or expired token"))?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Second whitespace-separated field of `<scheme> <token>`; the scheme itself
/// is ignored.
fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    let _scheme = parts.next()?;
    parts.next()
}

/// Handler argument that requires an attached identity (401 otherwise)
#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(ApiError::Authentication("Authentication required"))
    }
}
