//! Booking domain models and parameters.
//!
//! A booking moves through `confirmed -> cancelled` or `confirmed -> checked_in`; both
//! targets are terminal. The status is stored as text and parsed into `BookingStatus`
//! at the repository boundary.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{
        error::{internal::InternalError, AppError},
        util::seat::normalize_seat_label,
    },
};

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    CheckedIn,
}

impl BookingStatus {
    /// Storage and wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::CheckedIn => "checked_in",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "checked_in" => Ok(Self::CheckedIn),
            other => Err(InternalError::UnknownBookingStatus(other.to_string())),
        }
    }
}

/// A passenger's claim on one seat of one flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub booking_id: String,
    pub flight_id: String,
    pub passenger_id: String,
    /// Seat label fixed at creation, e.g. `12A`.
    pub seat_number: String,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(DbErr::Custom)` - Stored status is not a known booking status
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, DbErr> {
        let status = entity
            .booking_status
            .parse::<BookingStatus>()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self {
            booking_id: entity.booking_id,
            flight_id: entity.flight_id,
            passenger_id: entity.passenger_id,
            seat_number: entity.seat_number,
            status,
            booking_date: entity.booking_date,
        })
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            booking_id: self.booking_id,
            flight_id: self.flight_id,
            passenger_id: self.passenger_id,
            seat_number: self.seat_number,
            booking_status: self.status.to_string(),
            booking_date: self.booking_date,
        }
    }
}

/// Parameters for booking a seat.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub flight_id: String,
    pub passenger_id: String,
    /// Normalized requested seat; `None` lets the inventory counter assign one.
    pub seat_number: Option<String>,
    /// Identity of the caller making the booking, recorded in logs.
    pub caller_id: String,
}

impl CreateBookingParams {
    /// Builds booking parameters from a request, normalizing any requested seat.
    ///
    /// # Returns
    /// - `Ok(CreateBookingParams)` - Parameters with an upper-cased seat label
    /// - `Err(AppError::SeatErr)` - Requested seat label is malformed
    pub fn try_from_dto(dto: CreateBookingDto, caller_id: String) -> Result<Self, AppError> {
        let seat_number = dto
            .seat_number
            .as_deref()
            .map(normalize_seat_label)
            .transpose()?;

        Ok(Self {
            flight_id: dto.flight_id.trim().to_string(),
            passenger_id: dto.passenger_id.trim().to_string(),
            seat_number,
            caller_id,
        })
    }
}
