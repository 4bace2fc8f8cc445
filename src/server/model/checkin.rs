//! Check-in domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::checkin::{BoardingPassDto, CheckinRequestDto, CheckinStatusDto},
    server::error::{internal::InternalError, AppError},
};

/// Placeholder gate assigned at check-in until real gate assignment exists.
pub const DEFAULT_GATE: &str = "A1";

/// Boarding priority bucket derived from the seat row. Orders `A < B < C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoardingGroup {
    A,
    B,
    C,
}

impl BoardingGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for BoardingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardingGroup {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(InternalError::UnknownBoardingGroup(other.to_string())),
        }
    }
}

/// Proof of a completed check-in. At most one exists per booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinRecord {
    pub checkin_id: String,
    pub booking_id: String,
    pub checkin_time: DateTime<Utc>,
    pub boarding_pass_number: String,
    pub gate_number: Option<String>,
    pub boarding_group: BoardingGroup,
}

impl CheckinRecord {
    /// Converts an entity model to a check-in domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CheckinRecord)` - The converted record
    /// - `Err(DbErr::Custom)` - Stored boarding group is not A, B or C
    pub fn from_entity(entity: entity::checkin_record::Model) -> Result<Self, DbErr> {
        let boarding_group = entity
            .boarding_group
            .parse::<BoardingGroup>()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self {
            checkin_id: entity.checkin_id,
            booking_id: entity.booking_id,
            checkin_time: entity.checkin_time,
            boarding_pass_number: entity.boarding_pass_number,
            gate_number: entity.gate_number,
            boarding_group,
        })
    }
}

/// Parameters for inserting a check-in record.
#[derive(Debug, Clone)]
pub struct CreateCheckinRecordParams {
    pub booking_id: String,
    pub boarding_pass_number: String,
    pub gate_number: Option<String>,
    pub boarding_group: BoardingGroup,
    pub checkin_time: DateTime<Utc>,
}

/// Boarding pass view returned after check-in and by boarding pass lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardingPass {
    pub checkin_id: String,
    pub boarding_pass_number: String,
    pub flight_id: String,
    pub seat_number: String,
    pub boarding_group: BoardingGroup,
    pub gate_number: Option<String>,
    pub checkin_time: DateTime<Utc>,
}

impl BoardingPass {
    /// Combines a check-in record with the seat and flight of its booking.
    pub fn new(record: CheckinRecord, flight_id: String, seat_number: String) -> Self {
        Self {
            checkin_id: record.checkin_id,
            boarding_pass_number: record.boarding_pass_number,
            flight_id,
            seat_number,
            boarding_group: record.boarding_group,
            gate_number: record.gate_number,
            checkin_time: record.checkin_time,
        }
    }

    pub fn into_dto(self) -> BoardingPassDto {
        BoardingPassDto {
            checkin_id: self.checkin_id,
            boarding_pass_number: self.boarding_pass_number,
            flight_id: self.flight_id,
            seat_number: self.seat_number,
            boarding_group: self.boarding_group.to_string(),
            gate_number: self.gate_number,
            checkin_time: self.checkin_time,
        }
    }
}

/// Whether a booking has been checked in, as of `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinStatus {
    pub booking_id: String,
    pub checked_in: bool,
    pub checkin_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl CheckinStatus {
    pub fn into_dto(self) -> CheckinStatusDto {
        CheckinStatusDto {
            booking_id: self.booking_id,
            checked_in: self.checked_in,
            checkin_id: self.checkin_id,
            timestamp: self.timestamp,
        }
    }
}

/// Parameters for checking a passenger in.
#[derive(Debug, Clone)]
pub struct CheckinParams {
    pub booking_id: String,
    pub passenger_id: String,
    /// Identity of the caller performing the check-in, recorded in logs.
    pub caller_id: String,
}

impl CheckinParams {
    pub fn try_from_dto(dto: CheckinRequestDto, caller_id: String) -> Result<Self, AppError> {
        let booking_id = dto.booking_id.trim().to_string();
        let passenger_id = dto.passenger_id.trim().to_string();
        if booking_id.is_empty() || passenger_id.is_empty() {
            return Err(AppError::BadRequest(
                "booking_id and passenger_id are required".to_string(),
            ));
        }

        Ok(Self {
            booking_id,
            passenger_id,
            caller_id,
        })
    }
}
