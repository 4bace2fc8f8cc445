//! Flight seat inventory manager.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::flight::FlightRepository,
    error::{booking::BookingError, AppError},
};

/// Adjusts a flight's `available_seats` counter inside the caller's transaction.
pub struct FlightInventory<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightInventory<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Takes one seat from the flight.
    ///
    /// The decrement only applies while seats remain, so concurrent bookings can never
    /// drive the counter below zero. When nothing changed, the flight is looked up again
    /// to tell a missing flight apart from a sold-out one.
    ///
    /// # Returns
    /// - `Ok(())` - One seat taken
    /// - `Err(BookingError::FlightNotFound)` - Flight does not exist
    /// - `Err(BookingError::NoSeatsAvailable)` - Inventory already exhausted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn decrement(&self, flight_id: &str) -> Result<(), AppError> {
        let repo = FlightRepository::new(self.db);

        if repo.decrement_available_seats(flight_id).await? {
            return Ok(());
        }

        match repo.find_by_id(flight_id).await? {
            Some(_) => Err(BookingError::NoSeatsAvailable(flight_id.to_string()).into()),
            None => Err(BookingError::FlightNotFound(flight_id.to_string()).into()),
        }
    }

    /// Returns one seat to the flight.
    ///
    /// No upper bound is checked here; callers only restore a seat for a booking that
    /// held one.
    ///
    /// # Returns
    /// - `Ok(())` - Seat restored
    /// - `Err(BookingError::FlightNotFound)` - Flight does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn increment(&self, flight_id: &str) -> Result<(), AppError> {
        let repo = FlightRepository::new(self.db);

        if !repo.increment_available_seats(flight_id).await? {
            return Err(BookingError::FlightNotFound(flight_id.to_string()).into());
        }

        Ok(())
    }
}
