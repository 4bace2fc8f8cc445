use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        booking::{self, BOOKING_TAG},
        checkin::{self, CHECKIN_TAG},
        flight::{self, FLIGHT_TAG},
        health::{self, HEALTH_TAG},
        passenger::{self, PASSENGER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flight Booking & Check-in API",
        description = "Flight inventory, seat booking and web check-in"
    ),
    tags(
        (name = FLIGHT_TAG, description = "Flight schedule and seat inventory"),
        (name = PASSENGER_TAG, description = "Passenger profiles"),
        (name = BOOKING_TAG, description = "Seat bookings and cancellation"),
        (name = CHECKIN_TAG, description = "Web check-in and boarding passes"),
        (name = HEALTH_TAG, description = "Service health")
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document served at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(flight::create_flight, flight::list_flights))
        .routes(routes!(flight::get_flight))
        .routes(routes!(passenger::create_passenger))
        .routes(routes!(passenger::get_passenger))
        .routes(routes!(passenger::list_passenger_bookings))
        .routes(routes!(booking::create_booking))
        .routes(routes!(booking::get_booking, booking::cancel_booking))
        .routes(routes!(checkin::checkin))
        .routes(routes!(checkin::get_boarding_pass))
        .routes(routes!(checkin::get_checkin_status))
        .routes(routes!(health::health))
        .split_for_parts();

    router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
}
