//! Booking factory for creating test booking entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Inserts the booking row only; the referenced flight's inventory is not touched.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, &flight.flight_id, &passenger.passenger_id)
///     .seat_number("15C")
///     .status("cancelled")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    flight_id: String,
    passenger_id: String,
    seat_number: String,
    booking_status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - seat_number: `"1A"`
    /// - booking_status: `"confirmed"`
    pub fn new(
        db: &'a DatabaseConnection,
        flight_id: impl Into<String>,
        passenger_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            flight_id: flight_id.into(),
            passenger_id: passenger_id.into(),
            seat_number: "1A".to_string(),
            booking_status: "confirmed".to_string(),
        }
    }

    /// Sets the seat label.
    pub fn seat_number(mut self, seat_number: impl Into<String>) -> Self {
        self.seat_number = seat_number.into();
        self
    }

    /// Sets the stored booking status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.booking_status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            booking_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            flight_id: ActiveValue::Set(self.flight_id),
            passenger_id: ActiveValue::Set(self.passenger_id),
            seat_number: ActiveValue::Set(self.seat_number),
            booking_status: ActiveValue::Set(self.booking_status),
            booking_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking in seat `1A` for the given flight and passenger.
pub async fn create_booking(
    db: &DatabaseConnection,
    flight_id: impl Into<String>,
    passenger_id: impl Into<String>,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, flight_id, passenger_id)
        .build()
        .await
}
