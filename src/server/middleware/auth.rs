use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::auth::AuthError;

/// Header carrying the identity of the agent or system making the request.
pub const CALLER_ID_HEADER: &str = "x-caller-id";

/// Identity of the caller resolved from the `X-Caller-Id` header.
///
/// Booking and check-in endpoints take this extractor so every mutating operation can be
/// attributed to a caller. Requests without a usable header are rejected with
/// 401 Unauthorized before the handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(CALLER_ID_HEADER) else {
            return Err(AuthError::MissingCallerIdentity);
        };

        let caller_id = value
            .to_str()
            .map_err(|_| AuthError::InvalidCallerIdentity)?
            .trim();

        if caller_id.is_empty() {
            return Err(AuthError::MissingCallerIdentity);
        }

        Ok(Self(caller_id.to_string()))
    }
}
