//! Check-in record factory for creating test check-in entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test check-in records.
pub struct CheckinRecordFactory<'a> {
    db: &'a DatabaseConnection,
    booking_id: String,
    boarding_pass_number: String,
    gate_number: Option<String>,
    boarding_group: String,
}

impl<'a> CheckinRecordFactory<'a> {
    /// Creates a new CheckinRecordFactory with default values.
    ///
    /// Defaults:
    /// - boarding_pass_number: `"BP-{id}"` where id is auto-incremented
    /// - gate_number: `Some("A1")`
    /// - boarding_group: `"A"`
    pub fn new(db: &'a DatabaseConnection, booking_id: impl Into<String>) -> Self {
        Self {
            db,
            booking_id: booking_id.into(),
            boarding_pass_number: format!("BP-{}", next_id()),
            gate_number: Some("A1".to_string()),
            boarding_group: "A".to_string(),
        }
    }

    /// Sets the boarding group.
    pub fn boarding_group(mut self, boarding_group: impl Into<String>) -> Self {
        self.boarding_group = boarding_group.into();
        self
    }

    /// Builds and inserts the check-in record into the database.
    pub async fn build(self) -> Result<entity::checkin_record::Model, DbErr> {
        entity::checkin_record::ActiveModel {
            checkin_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            booking_id: ActiveValue::Set(self.booking_id),
            checkin_time: ActiveValue::Set(Utc::now()),
            boarding_pass_number: ActiveValue::Set(self.boarding_pass_number),
            gate_number: ActiveValue::Set(self.gate_number),
            boarding_group: ActiveValue::Set(self.boarding_group),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a check-in record with default values for the given booking.
pub async fn create_checkin_record(
    db: &DatabaseConnection,
    booking_id: impl Into<String>,
) -> Result<entity::checkin_record::Model, DbErr> {
    CheckinRecordFactory::new(db, booking_id).build().await
}
