use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::flight::FlightRepository,
    error::{booking::BookingError, AppError},
    model::flight::{CreateFlightParams, Flight},
    service::unique_violation_as,
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a flight with its full seat inventory available
    ///
    /// Fails with `FlightAlreadyExists` if the identifier is taken, including when a
    /// concurrent request inserts it first.
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, AppError> {
        let txn = self.db.begin().await?;
        let repo = FlightRepository::new(&txn);

        let flight_id = params.flight_id.clone();
        if repo.find_by_id(&flight_id).await?.is_some() {
            return Err(BookingError::FlightAlreadyExists(flight_id).into());
        }

        let flight = repo
            .create(params)
            .await
            .map_err(|e| unique_violation_as(e, || BookingError::FlightAlreadyExists(flight_id)))?;

        txn.commit().await?;

        tracing::info!(
            flight_id = %flight.flight_id,
            total_seats = flight.total_seats,
            "Created flight"
        );

        Ok(flight)
    }

    /// Gets a flight by identifier
    pub async fn get(&self, flight_id: &str) -> Result<Flight, AppError> {
        let repo = FlightRepository::new(self.db);

        repo.find_by_id(flight_id)
            .await?
            .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()).into())
    }

    /// Gets all flights ordered by departure time
    pub async fn list_all(&self) -> Result<Vec<Flight>, AppError> {
        let repo = FlightRepository::new(self.db);

        Ok(repo.list_all().await?)
    }
}
