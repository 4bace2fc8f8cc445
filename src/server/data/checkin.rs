//! Check-in record data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::{
    booking::Booking,
    checkin::{CheckinRecord, CreateCheckinRecordParams},
    flight::Flight,
};

pub struct CheckinRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CheckinRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a check-in record by its identifier.
    pub async fn find_by_id(&self, checkin_id: &str) -> Result<Option<CheckinRecord>, DbErr> {
        entity::prelude::CheckinRecord::find_by_id(checkin_id.to_string())
            .one(self.db)
            .await?
            .map(CheckinRecord::from_entity)
            .transpose()
    }

    /// Finds the check-in record for a booking, if the booking has been checked in.
    pub async fn find_by_booking(&self, booking_id: &str) -> Result<Option<CheckinRecord>, DbErr> {
        entity::prelude::CheckinRecord::find()
            .filter(entity::checkin_record::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await?
            .map(CheckinRecord::from_entity)
            .transpose()
    }

    /// Finds a check-in record with its booking and that booking's flight.
    ///
    /// Returns `None` if any link in the chain is missing.
    pub async fn find_with_booking_and_flight(
        &self,
        checkin_id: &str,
    ) -> Result<Option<(CheckinRecord, Booking, Flight)>, DbErr> {
        let Some((record, Some(booking))) =
            entity::prelude::CheckinRecord::find_by_id(checkin_id.to_string())
                .find_also_related(entity::prelude::Booking)
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let Some(flight) = entity::prelude::Flight::find_by_id(booking.flight_id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some((
            CheckinRecord::from_entity(record)?,
            Booking::from_entity(booking)?,
            Flight::from_entity(flight),
        )))
    }

    /// Inserts a check-in record under a freshly generated UUID.
    pub async fn create(&self, params: CreateCheckinRecordParams) -> Result<CheckinRecord, DbErr> {
        let entity = entity::checkin_record::ActiveModel {
            checkin_id: ActiveValue::Set(Uuid::new_v4().to_string()),
            booking_id: ActiveValue::Set(params.booking_id),
            checkin_time: ActiveValue::Set(params.checkin_time),
            boarding_pass_number: ActiveValue::Set(params.boarding_pass_number),
            gate_number: ActiveValue::Set(params.gate_number),
            boarding_group: ActiveValue::Set(params.boarding_group.to_string()),
        }
        .insert(self.db)
        .await?;

        CheckinRecord::from_entity(entity)
    }
}
