use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::BookingDto,
        passenger::{CreatePassengerDto, PassengerDto},
    },
    server::{
        error::AppError, model::passenger::CreatePassengerParams,
        service::passenger::PassengerService, state::AppState,
    },
};

/// Tag for grouping passenger endpoints in OpenAPI documentation
pub static PASSENGER_TAG: &str = "passenger";

/// Register a passenger.
///
/// Names are trimmed and title-cased, the email is lower-cased and the phone number is
/// reduced to digits with an optional leading `+` before storing.
///
/// # Returns
/// - `201 Created` - Successfully registered passenger
/// - `400 Bad Request` - Invalid name, email or phone
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/passengers",
    tag = PASSENGER_TAG,
    request_body = CreatePassengerDto,
    responses(
        (status = 201, description = "Successfully registered passenger", body = PassengerDto),
        (status = 400, description = "Invalid passenger data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_passenger(
    State(state): State<AppState>,
    Json(payload): Json<CreatePassengerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PassengerService::new(&state.db);

    let params = CreatePassengerParams::try_from_dto(payload)?;

    let passenger = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(passenger.into_dto())))
}

/// Get a passenger profile.
#[utoipa::path(
    get,
    path = "/api/passengers/{passenger_id}",
    tag = PASSENGER_TAG,
    params(
        ("passenger_id" = String, Path, description = "Passenger identifier")
    ),
    responses(
        (status = 200, description = "Passenger found", body = PassengerDto),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_passenger(
    State(state): State<AppState>,
    Path(passenger_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PassengerService::new(&state.db);

    let passenger = service.get(&passenger_id).await?;

    Ok(Json(passenger.into_dto()))
}

/// List every booking held by a passenger, in any status.
#[utoipa::path(
    get,
    path = "/api/passengers/{passenger_id}/bookings",
    tag = PASSENGER_TAG,
    params(
        ("passenger_id" = String, Path, description = "Passenger identifier")
    ),
    responses(
        (status = 200, description = "Bookings of the passenger", body = Vec<BookingDto>),
        (status = 404, description = "Passenger not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_passenger_bookings(
    State(state): State<AppState>,
    Path(passenger_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PassengerService::new(&state.db);

    let bookings = service.list_bookings(&passenger_id).await?;

    Ok(Json(
        bookings
            .into_iter()
            .map(|b| b.into_dto())
            .collect::<Vec<BookingDto>>(),
    ))
}
