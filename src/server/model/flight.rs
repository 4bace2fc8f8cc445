//! Flight domain models and parameters.
//!
//! Provides the flight domain model carrying seat inventory, and the parameter type for
//! creating new flights.

use chrono::{DateTime, Utc};

use crate::{
    model::flight::{CreateFlightDto, FlightDto},
    server::{error::AppError, util::validate::normalize_airport_code},
};

/// Status assigned to every newly created flight.
pub const FLIGHT_STATUS_SCHEDULED: &str = "scheduled";

/// A scheduled departure with its seat inventory.
///
/// `available_seats` is kept within `0..=total_seats` by the booking lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Caller-assigned flight identifier such as `AI101`.
    pub flight_id: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub aircraft_type: String,
    /// Fixed seat capacity of the aircraft.
    pub total_seats: i32,
    /// Seats not held by a confirmed or checked-in booking.
    pub available_seats: i32,
    pub status: String,
}

impl Flight {
    /// Converts an entity model to a flight domain model at the repository boundary.
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            flight_id: entity.flight_id,
            departure_airport: entity.departure_airport,
            arrival_airport: entity.arrival_airport,
            departure_time: entity.departure_time,
            arrival_time: entity.arrival_time,
            aircraft_type: entity.aircraft_type,
            total_seats: entity.total_seats,
            available_seats: entity.available_seats,
            status: entity.status,
        }
    }

    /// Converts the flight domain model to a DTO for API responses.
    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            flight_id: self.flight_id,
            departure_airport: self.departure_airport,
            arrival_airport: self.arrival_airport,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            aircraft_type: self.aircraft_type,
            total_seats: self.total_seats,
            available_seats: self.available_seats,
            status: self.status,
        }
    }
}

/// Parameters for creating a new flight.
///
/// The flight starts with every seat available and status `scheduled`.
#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub flight_id: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub aircraft_type: String,
    pub total_seats: i32,
}

impl CreateFlightParams {
    /// Validates and normalizes a flight creation request.
    ///
    /// # Returns
    /// - `Ok(CreateFlightParams)` - Airport codes upper-cased, flight id trimmed with its case kept
    /// - `Err(AppError::BadRequest)` - Empty identifier or airport code, non-positive
    ///   capacity, or arrival not after departure
    pub fn try_from_dto(dto: CreateFlightDto) -> Result<Self, AppError> {
        let flight_id = dto.flight_id.trim().to_string();
        if flight_id.is_empty() {
            return Err(AppError::BadRequest("flight_id must not be empty".to_string()));
        }
        if dto.total_seats <= 0 {
            return Err(AppError::BadRequest(
                "total_seats must be greater than 0".to_string(),
            ));
        }
        if dto.arrival_time <= dto.departure_time {
            return Err(AppError::BadRequest(
                "arrival_time must be after departure_time".to_string(),
            ));
        }

        Ok(Self {
            flight_id,
            departure_airport: normalize_airport_code("departure_airport", &dto.departure_airport)?,
            arrival_airport: normalize_airport_code("arrival_airport", &dto.arrival_airport)?,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
            aircraft_type: dto.aircraft_type.trim().to_string(),
            total_seats: dto.total_seats,
        })
    }
}
