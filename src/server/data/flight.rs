//! Flight data repository for database operations.
//!
//! Provides the `FlightRepository` for flight creation, lookup and the atomic seat
//! inventory adjustments used by the booking lifecycle.

use sea_orm::{
    sea_query::{self, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::flight::{CreateFlightParams, Flight, FLIGHT_STATUS_SCHEDULED};

/// Repository providing database operations for flights.
pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    /// Creates a new FlightRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a flight by its identifier.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - Flight found
    /// - `Ok(None)` - No flight with that identifier
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, flight_id: &str) -> Result<Option<Flight>, DbErr> {
        let entity = entity::prelude::Flight::find_by_id(flight_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Flight::from_entity))
    }

    /// Inserts a new flight with all seats available and status `scheduled`.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The created flight
    /// - `Err(DbErr)` - Database error, including a primary key conflict
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, DbErr> {
        let entity = entity::flight::ActiveModel {
            flight_id: ActiveValue::Set(params.flight_id),
            departure_airport: ActiveValue::Set(params.departure_airport),
            arrival_airport: ActiveValue::Set(params.arrival_airport),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            aircraft_type: ActiveValue::Set(params.aircraft_type),
            total_seats: ActiveValue::Set(params.total_seats),
            available_seats: ActiveValue::Set(params.total_seats),
            status: ActiveValue::Set(FLIGHT_STATUS_SCHEDULED.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity))
    }

    /// Gets all flights ordered by departure time.
    pub async fn list_all(&self) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::DepartureTime)
            .order_by_asc(entity::flight::Column::FlightId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Takes one seat from the flight's inventory if any remain.
    ///
    /// The availability check and the decrement are a single conditional UPDATE, so two
    /// concurrent callers cannot both take the last seat.
    ///
    /// # Returns
    /// - `Ok(true)` - One seat was taken
    /// - `Ok(false)` - Flight does not exist or has no seats left
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_available_seats(&self, flight_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::update_many()
            .col_expr(
                entity::flight::Column::AvailableSeats,
                sea_query::ExprTrait::sub(Expr::col(entity::flight::Column::AvailableSeats), 1),
            )
            .filter(entity::flight::Column::FlightId.eq(flight_id))
            .filter(entity::flight::Column::AvailableSeats.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns one seat to the flight's inventory.
    ///
    /// # Returns
    /// - `Ok(true)` - Seat restored
    /// - `Ok(false)` - Flight does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_available_seats(&self, flight_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::update_many()
            .col_expr(
                entity::flight::Column::AvailableSeats,
                sea_query::ExprTrait::add(Expr::col(entity::flight::Column::AvailableSeats), 1),
            )
            .filter(entity::flight::Column::FlightId.eq(flight_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
