//! Passenger data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    booking::Booking,
    passenger::{CreatePassengerParams, Passenger},
};

pub struct PassengerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassengerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a passenger by identifier.
    pub async fn find_by_id(&self, passenger_id: &str) -> Result<Option<Passenger>, DbErr> {
        let entity = entity::prelude::Passenger::find_by_id(passenger_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Passenger::from_entity))
    }

    /// Finds a passenger by normalized email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Passenger>, DbErr> {
        let entity = entity::prelude::Passenger::find()
            .filter(entity::passenger::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Passenger::from_entity))
    }

    /// Inserts a passenger under a freshly generated UUID.
    ///
    /// # Returns
    /// - `Ok(Passenger)` - The created passenger
    /// - `Err(DbErr)` - Database error, including a unique email violation
    pub async fn create(&self, params: CreatePassengerParams) -> Result<Passenger, DbErr> {
        let entity = entity::passenger::ActiveModel {
            passenger_id: ActiveValue::Set(Uuid::new_v4().to_string()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
        }
        .insert(self.db)
        .await?;

        Ok(Passenger::from_entity(entity))
    }

    /// Gets every booking held by a passenger, oldest first.
    pub async fn list_bookings(&self, passenger_id: &str) -> Result<Vec<Booking>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::PassengerId.eq(passenger_id))
            .order_by_asc(entity::booking::Column::BookingDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }
}
