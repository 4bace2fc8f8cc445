use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request did not carry a caller identity header, or it was blank.
    #[error("Request is missing the caller identity")]
    MissingCallerIdentity,

    /// The caller identity header is present but is not valid visible ASCII.
    #[error("Caller identity header is not valid text")]
    InvalidCallerIdentity,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants result in 401 Unauthorized. The reason is logged at debug level
/// while the client receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected unauthenticated request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized access".to_string(),
            }),
        )
            .into_response()
    }
}
