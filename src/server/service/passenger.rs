use sea_orm::DatabaseConnection;

use crate::server::{
    data::passenger::PassengerRepository,
    error::{booking::BookingError, AppError},
    model::{
        booking::Booking,
        passenger::{CreatePassengerParams, Passenger},
    },
    service::unique_violation_as,
};

pub struct PassengerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PassengerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a passenger, rejecting an email that is already registered
    pub async fn create(&self, params: CreatePassengerParams) -> Result<Passenger, AppError> {
        let repo = PassengerRepository::new(self.db);

        let email = params.email.clone();
        if repo.find_by_email(&email).await?.is_some() {
            return Err(BookingError::EmailAlreadyRegistered(email).into());
        }

        let passenger = repo
            .create(params)
            .await
            .map_err(|e| unique_violation_as(e, || BookingError::EmailAlreadyRegistered(email)))?;

        tracing::info!(passenger_id = %passenger.passenger_id, "Registered passenger");

        Ok(passenger)
    }

    /// Gets a passenger by identifier
    pub async fn get(&self, passenger_id: &str) -> Result<Passenger, AppError> {
        let repo = PassengerRepository::new(self.db);

        repo.find_by_id(passenger_id)
            .await?
            .ok_or_else(|| BookingError::PassengerNotFound(passenger_id.to_string()).into())
    }

    /// Gets every booking of a known passenger
    pub async fn list_bookings(&self, passenger_id: &str) -> Result<Vec<Booking>, AppError> {
        let repo = PassengerRepository::new(self.db);

        if repo.find_by_id(passenger_id).await?.is_none() {
            return Err(BookingError::PassengerNotFound(passenger_id.to_string()).into());
        }

        Ok(repo.list_bookings(passenger_id).await?)
    }
}
