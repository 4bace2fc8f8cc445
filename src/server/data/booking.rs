//! Booking data repository for database operations.
//!
//! Status changes go through `set_status`, which only updates a booking still in the
//! expected status. Callers use the returned flag to detect a concurrent transition.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::{
    booking::{Booking, BookingStatus},
    flight::Flight,
};

/// Fields required to insert a booking once its seat is settled.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub flight_id: String,
    pub passenger_id: String,
    pub seat_number: String,
}

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a booking by identifier.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that identifier
    /// - `Err(DbErr)` - Database error, or a stored status that cannot be parsed
    pub async fn find_by_id(&self, booking_id: &str) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find_by_id(booking_id.to_string())
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Finds a booking together with the flight it is on.
    ///
    /// Returns `None` when the booking does not exist or its flight is missing.
    pub async fn find_with_flight(
        &self,
        booking_id: &str,
    ) -> Result<Option<(Booking, Flight)>, DbErr> {
        let result = entity::prelude::Booking::find_by_id(booking_id.to_string())
            .find_also_related(entity::prelude::Flight)
            .one(self.db)
            .await?;

        match result {
            Some((booking, Some(flight))) => Ok(Some((
                Booking::from_entity(booking)?,
                Flight::from_entity(flight),
            ))),
            _ => Ok(None),
        }
    }

    /// Inserts a `confirmed` booking under a freshly generated UUID, dated now.
    pub async fn create(&self, booking: NewBooking) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            booking_id: ActiveValue::Set(Uuid::new_v4().to_string()),
            flight_id: ActiveValue::Set(booking.flight_id),
            passenger_id: ActiveValue::Set(booking.passenger_id),
            seat_number: ActiveValue::Set(booking.seat_number),
            booking_status: ActiveValue::Set(BookingStatus::Confirmed.to_string()),
            booking_date: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    /// Moves a booking from `expected` to `status`.
    ///
    /// # Returns
    /// - `Ok(true)` - Booking was in `expected` and is now in `status`
    /// - `Ok(false)` - Booking does not exist or is no longer in `expected`
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        booking_id: &str,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::BookingStatus,
                Expr::value(status.as_str()),
            )
            .filter(entity::booking::Column::BookingId.eq(booking_id))
            .filter(entity::booking::Column::BookingStatus.eq(expected.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
