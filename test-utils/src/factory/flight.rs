//! Flight factory for creating test flight entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db)
///     .flight_id("AI101")
///     .total_seats(180)
///     .available_seats(50)
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    flight_id: String,
    departure_airport: String,
    arrival_airport: String,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    aircraft_type: String,
    total_seats: i32,
    available_seats: Option<i32>,
    status: String,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_id: `"FL{id}"` where id is auto-incremented
    /// - route: `DEL` to `BOM` on an `A320`
    /// - departure_time: 12 hours from now, inside the check-in window
    /// - arrival_time: 14 hours from now
    /// - total_seats: `180`, available_seats: equal to total_seats
    /// - status: `"scheduled"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            flight_id: format!("FL{}", id),
            departure_airport: "DEL".to_string(),
            arrival_airport: "BOM".to_string(),
            departure_time: now + Duration::hours(12),
            arrival_time: now + Duration::hours(14),
            aircraft_type: "A320".to_string(),
            total_seats: 180,
            available_seats: None,
            status: "scheduled".to_string(),
        }
    }

    /// Sets the flight identifier.
    pub fn flight_id(mut self, flight_id: impl Into<String>) -> Self {
        self.flight_id = flight_id.into();
        self
    }

    /// Sets the scheduled departure time. Arrival is moved to two hours after it.
    pub fn departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self.arrival_time = departure_time + Duration::hours(2);
        self
    }

    /// Sets the total seat capacity.
    pub fn total_seats(mut self, total_seats: i32) -> Self {
        self.total_seats = total_seats;
        self
    }

    /// Sets the available seat count. Defaults to `total_seats` when not set.
    pub fn available_seats(mut self, available_seats: i32) -> Self {
        self.available_seats = Some(available_seats);
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            flight_id: ActiveValue::Set(self.flight_id),
            departure_airport: ActiveValue::Set(self.departure_airport),
            arrival_airport: ActiveValue::Set(self.arrival_airport),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            total_seats: ActiveValue::Set(self.total_seats),
            available_seats: ActiveValue::Set(self.available_seats.unwrap_or(self.total_seats)),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values.
///
/// Shorthand for `FlightFactory::new(db).build().await`.
pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}
