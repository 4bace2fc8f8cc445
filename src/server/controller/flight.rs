use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{CreateFlightDto, FlightDto},
    },
    server::{
        error::AppError, model::flight::CreateFlightParams, service::flight::FlightService,
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Create a new flight.
///
/// Registers a scheduled flight under a caller-assigned identifier with all of its seats
/// available.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Flight route, schedule, aircraft and capacity
///
/// # Returns
/// - `201 Created` - Successfully created flight
/// - `400 Bad Request` - Invalid flight data
/// - `409 Conflict` - Flight identifier already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Successfully created flight", body = FlightDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 409, description = "Flight identifier already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = FlightService::new(&state.db);

    let params = CreateFlightParams::try_from_dto(payload)?;

    let flight = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// List all flights.
///
/// # Returns
/// - `200 OK` - Flights ordered by departure time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Flights ordered by departure time", body = Vec<FlightDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = FlightService::new(&state.db);

    let flights = service.list_all().await?;

    Ok(Json(
        flights
            .into_iter()
            .map(|f| f.into_dto())
            .collect::<Vec<FlightDto>>(),
    ))
}

/// Get a flight with its current seat availability.
///
/// # Returns
/// - `200 OK` - Flight found
/// - `404 Not Found` - Unknown flight identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = String, Path, description = "Flight identifier")
    ),
    responses(
        (status = 200, description = "Flight found", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = FlightService::new(&state.db);

    let flight = service.get(&flight_id).await?;

    Ok(Json(flight.into_dto()))
}
