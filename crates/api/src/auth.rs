//! Caller identity extraction.
//!
//! Tokens are issued and verified by the gateway in front of this service,
//! which forwards the authenticated user as `Authorization: Bearer <user-id>`.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use common::UserId;

use crate::error::ApiError;

/// The authenticated caller of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".to_string()))?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.split_once(' '))
            .filter(|(scheme, _)| *scheme == "Bearer")
            .map(|(_, token)| token)
            .ok_or_else(|| {
                ApiError::Unauthorized("invalid authorization header format".to_string())
            })?;

        let user_id = token
            .parse::<UserId>()
            .map_err(|_| ApiError::Unauthorized("invalid or expired token".to_string()))?;

        Ok(Self(user_id))
    }
}
