use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError, middleware::auth::CallerIdentity, model::booking::CreateBookingParams,
        service::booking::BookingService, state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a seat on a flight.
///
/// Uses the requested seat when one is given, otherwise assigns the next seat from the
/// flight's inventory. The flight loses one available seat.
///
/// # Access Control
/// - Requires the `X-Caller-Id` header
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `caller` - Identity of the caller making the booking
/// - `payload` - Flight, passenger and optional seat
///
/// # Returns
/// - `201 Created` - Confirmed booking
/// - `400 Bad Request` - Malformed seat label
/// - `401 Unauthorized` - Caller identity missing
/// - `404 Not Found` - Unknown flight or passenger
/// - `409 Conflict` - Flight is sold out
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    params(
        ("X-Caller-Id" = String, Header, description = "Identity of the calling agent")
    ),
    responses(
        (status = 201, description = "Confirmed booking", body = BookingDto),
        (status = 400, description = "Malformed seat label", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 404, description = "Flight or passenger not found", body = ErrorDto),
        (status = 409, description = "No seats available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    CallerIdentity(caller_id): CallerIdentity,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let params = CreateBookingParams::try_from_dto(payload, caller_id)?;

    let booking = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Get a booking.
///
/// # Access Control
/// - Requires the `X-Caller-Id` header
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = String, Path, description = "Booking identifier"),
        ("X-Caller-Id" = String, Header, description = "Identity of the calling agent")
    ),
    responses(
        (status = 200, description = "Booking found", body = BookingDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    CallerIdentity(_caller_id): CallerIdentity,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    let booking = service.get(&booking_id).await?;

    Ok(Json(booking.into_dto()))
}

/// Cancel a confirmed booking.
///
/// Sets the booking to `cancelled` and returns its seat to the flight. Bookings that are
/// already cancelled or checked in are rejected.
///
/// # Access Control
/// - Requires the `X-Caller-Id` header
///
/// # Returns
/// - `204 No Content` - Booking cancelled
/// - `401 Unauthorized` - Caller identity missing
/// - `404 Not Found` - Unknown booking
/// - `409 Conflict` - Booking is not confirmed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = String, Path, description = "Booking identifier"),
        ("X-Caller-Id" = String, Header, description = "Identity of the calling agent")
    ),
    responses(
        (status = 204, description = "Booking cancelled"),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is not confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    CallerIdentity(caller_id): CallerIdentity,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db);

    service.cancel(&booking_id, &caller_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
