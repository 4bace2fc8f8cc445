use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeatError {
    /// Seat counters passed to seat assignment are inconsistent.
    ///
    /// Requires `total_seats > 0` and `0 <= available_seats <= total_seats`. Reaching this
    /// from a stored flight means its inventory is corrupt, so it maps to 500.
    #[error("Invalid seat capacity: total {total_seats}, available {available_seats}")]
    InvalidCapacity {
        total_seats: i32,
        available_seats: i32,
    },

    /// A seat label could not be interpreted as `<row><column>`.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid seat number format: '{0}'")]
    InvalidSeatFormat(String),
}

impl IntoResponse for SeatError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSeatFormat(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err @ Self::InvalidCapacity { .. } => InternalServerError(err).into_response(),
        }
    }
}
