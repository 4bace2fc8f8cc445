//! Passenger domain models and parameters.

use crate::{
    model::passenger::{CreatePassengerDto, PassengerDto},
    server::{
        error::AppError,
        util::validate::{normalize_email, normalize_name, normalize_phone},
    },
};

/// A traveler profile. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub passenger_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Lower-cased, unique across passengers.
    pub email: String,
    /// Digits with an optional leading `+`.
    pub phone: String,
    pub date_of_birth: String,
}

impl Passenger {
    pub fn from_entity(entity: entity::passenger::Model) -> Self {
        Self {
            passenger_id: entity.passenger_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            date_of_birth: entity.date_of_birth,
        }
    }

    pub fn into_dto(self) -> PassengerDto {
        PassengerDto {
            passenger_id: self.passenger_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
        }
    }
}

/// Parameters for registering a passenger.
#[derive(Debug, Clone)]
pub struct CreatePassengerParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
}

impl CreatePassengerParams {
    /// Normalizes names, email and phone from a registration request.
    ///
    /// # Returns
    /// - `Ok(CreatePassengerParams)` - Normalized parameters
    /// - `Err(AppError::BadRequest)` - A field failed shape validation
    pub fn try_from_dto(dto: CreatePassengerDto) -> Result<Self, AppError> {
        Ok(Self {
            first_name: normalize_name("first_name", &dto.first_name)?,
            last_name: normalize_name("last_name", &dto.last_name)?,
            email: normalize_email(&dto.email)?,
            phone: normalize_phone(&dto.phone)?,
            date_of_birth: dto.date_of_birth.trim().to_string(),
        })
    }
}
