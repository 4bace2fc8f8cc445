use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        checkin::{BoardingPassDto, CheckinRequestDto, CheckinStatusDto},
    },
    server::{
        error::AppError, middleware::auth::CallerIdentity, model::checkin::CheckinParams,
        service::checkin::CheckinService, state::AppState,
    },
};

/// Tag for grouping check-in endpoints in OpenAPI documentation
pub static CHECKIN_TAG: &str = "checkin";

/// Check a passenger in and issue a boarding pass.
///
/// Check-in is open from 24 hours until 1 hour before departure and succeeds at most
/// once per booking.
///
/// # Access Control
/// - Requires the `X-Caller-Id` header
///
/// # Returns
/// - `201 Created` - Boarding pass issued
/// - `400 Bad Request` - Passenger does not own the booking
/// - `401 Unauthorized` - Caller identity missing
/// - `404 Not Found` - Unknown booking
/// - `409 Conflict` - Already checked in, booking cancelled, or outside the window
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/checkin",
    tag = CHECKIN_TAG,
    request_body = CheckinRequestDto,
    params(
        ("X-Caller-Id" = String, Header, description = "Identity of the calling agent")
    ),
    responses(
        (status = 201, description = "Boarding pass issued", body = BoardingPassDto),
        (status = 400, description = "Passenger does not own the booking", body = ErrorDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Check-in not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn checkin(
    State(state): State<AppState>,
    CallerIdentity(caller_id): CallerIdentity,
    Json(payload): Json<CheckinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CheckinService::new(&state.db);

    let params = CheckinParams::try_from_dto(payload, caller_id)?;

    let boarding_pass = service.checkin(params).await?;

    Ok((StatusCode::CREATED, Json(boarding_pass.into_dto())))
}

/// Get the boarding pass issued by a check-in.
#[utoipa::path(
    get,
    path = "/api/checkin/{checkin_id}",
    tag = CHECKIN_TAG,
    params(
        ("checkin_id" = String, Path, description = "Check-in identifier"),
        ("X-Caller-Id" = String, Header, description = "Identity of the calling agent")
    ),
    responses(
        (status = 200, description = "Boarding pass found", body = BoardingPassDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 404, description = "Check-in not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boarding_pass(
    State(state): State<AppState>,
    CallerIdentity(_caller_id): CallerIdentity,
    Path(checkin_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CheckinService::new(&state.db);

    let boarding_pass = service.get_boarding_pass(&checkin_id).await?;

    Ok(Json(boarding_pass.into_dto()))
}

/// Report whether a booking has been checked in.
///
/// Unknown bookings report `checked_in: false` rather than 404.
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}/checkin-status",
    tag = CHECKIN_TAG,
    params(
        ("booking_id" = String, Path, description = "Booking identifier"),
        ("X-Caller-Id" = String, Header, description = "Identity of the calling agent")
    ),
    responses(
        (status = 200, description = "Check-in status", body = CheckinStatusDto),
        (status = 401, description = "Caller identity missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_checkin_status(
    State(state): State<AppState>,
    CallerIdentity(_caller_id): CallerIdentity,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CheckinService::new(&state.db);

    let status = service.get_status(&booking_id).await?;

    Ok(Json(status.into_dto()))
}
