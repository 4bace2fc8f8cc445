use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::booking::BookingStatus};

/// Business outcomes of the booking and check-in lifecycles.
///
/// Every variant is an expected result of a valid request against the current state of
/// the store, not an infrastructure failure. Each carries enough context for a readable
/// message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("Flight {0} not found")]
    FlightNotFound(String),

    #[error("Passenger {0} not found")]
    PassengerNotFound(String),

    #[error("Booking {0} not found")]
    BookingNotFound(String),

    #[error("Check-in {0} not found")]
    CheckinNotFound(String),

    /// Inventory for the flight was exhausted at booking time.
    #[error("No seats available on flight {0}")]
    NoSeatsAvailable(String),

    #[error("Booking {0} already checked in")]
    AlreadyCheckedIn(String),

    /// The passenger supplied at check-in does not own the booking.
    #[error("Passenger ID mismatch for booking {booking_id}")]
    PassengerMismatch {
        booking_id: String,
        passenger_id: String,
    },

    /// Check-in attempted outside the window; carries the window's reason.
    #[error("{0}")]
    CheckinWindow(String),

    /// The booking is not in the `confirmed` state required by the operation.
    #[error("Booking {booking_id} is {status}, expected confirmed")]
    InvalidBookingStatus {
        booking_id: String,
        status: BookingStatus,
    },

    #[error("Flight {0} already exists")]
    FlightAlreadyExists(String),

    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),
}

impl BookingError {
    /// HTTP status code for this business outcome.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::FlightNotFound(_)
            | Self::PassengerNotFound(_)
            | Self::BookingNotFound(_)
            | Self::CheckinNotFound(_) => StatusCode::NOT_FOUND,
            Self::PassengerMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::NoSeatsAvailable(_)
            | Self::AlreadyCheckedIn(_)
            | Self::CheckinWindow(_)
            | Self::InvalidBookingStatus { .. }
            | Self::FlightAlreadyExists(_)
            | Self::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
        }
    }
}

/// Converts booking errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For the `*NotFound` variants
/// - 400 Bad Request - For `PassengerMismatch`
/// - 409 Conflict - For inventory, window, status and uniqueness conflicts
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
