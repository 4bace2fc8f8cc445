use crate::server::{
    error::{booking::BookingError, AppError},
    model::booking::{BookingStatus, CreateBookingParams},
    service::booking::BookingService,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};


/// Reads a flight's stored `available_seats` directly from the table.
async fn available_seats(db: &DatabaseConnection, flight_id: &str) -> Result<i32, DbErr> {
    Ok(entity::prelude::Flight::find_by_id(flight_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(flight_id.to_string()))?
        .available_seats)
}

/// Reads a booking's stored status string directly from the table.
async fn stored_status(db: &DatabaseConnection, booking_id: &str) -> Result<String, DbErr> {
    Ok(entity::prelude::Booking::find_by_id(booking_id.to_string())
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(booking_id.to_string()))?
        .booking_status)
}

fn booking_params(flight_id: &str, passenger_id: &str) -> CreateBookingParams {
    CreateBookingParams {
        flight_id: flight_id.to_string(),
        passenger_id: passenger_id.to_string(),
        seat_number: None,
        caller_id: "agent-1".to_string(),
    }
}

/// Extracts the business error from an application error, panicking on anything else.
fn booking_error(err: AppError) -> BookingError {
    match err {
        AppError::BookingErr(e) => e,
        other => panic!("expected booking error, got {:?}", other),
    }
}
