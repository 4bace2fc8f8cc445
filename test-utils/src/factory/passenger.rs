//! Passenger factory for creating test passenger entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test passengers with customizable fields.
pub struct PassengerFactory<'a> {
    db: &'a DatabaseConnection,
    passenger_id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    date_of_birth: String,
}

impl<'a> PassengerFactory<'a> {
    /// Creates a new PassengerFactory with default values.
    ///
    /// Defaults:
    /// - passenger_id: random UUID v4
    /// - name: `"Test Passenger{id}"`
    /// - email: `"passenger{id}@example.com"` where id is auto-incremented
    /// - phone: `"+15551234567"`
    /// - date_of_birth: `"1990-01-01"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            passenger_id: uuid::Uuid::new_v4().to_string(),
            first_name: "Test".to_string(),
            last_name: format!("Passenger{}", id),
            email: format!("passenger{}@example.com", id),
            phone: "+15551234567".to_string(),
            date_of_birth: "1990-01-01".to_string(),
        }
    }

    /// Sets the passenger email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the passenger first and last name.
    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the passenger entity into the database.
    pub async fn build(self) -> Result<entity::passenger::Model, DbErr> {
        entity::passenger::ActiveModel {
            passenger_id: ActiveValue::Set(self.passenger_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a passenger with default values.
pub async fn create_passenger(db: &DatabaseConnection) -> Result<entity::passenger::Model, DbErr> {
    PassengerFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_multiple_unique_passengers() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Passenger)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_passenger(db).await?;
        let second = create_passenger(db).await?;

        assert_ne!(first.passenger_id, second.passenger_id);
        assert_ne!(first.email, second.email);

        Ok(())
    }
}
