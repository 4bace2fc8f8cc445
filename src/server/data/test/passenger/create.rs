use super::*;

fn params(email: &str) -> CreatePassengerParams {
    CreatePassengerParams {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone: "+15551234567".to_string(),
        date_of_birth: "1990-05-17".to_string(),
    }
}

/// Tests creating a passenger.
///
/// Verifies that a UUID identifier is generated and the fields are stored as given.
///
/// Expected: Ok with passenger created
#[tokio::test]
async fn creates_passenger_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PassengerRepository::new(db);
    let passenger = repo.create(params("jane@example.com")).await?;

    assert!(uuid::Uuid::parse_str(&passenger.passenger_id).is_ok());
    assert_eq!(passenger.first_name, "Jane");
    assert_eq!(passenger.email, "jane@example.com");

    Ok(())
}

/// Tests creating two passengers with the same email.
///
/// Verifies that the unique index on email rejects the second insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PassengerRepository::new(db);
    repo.create(params("dup@example.com")).await?;
    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
