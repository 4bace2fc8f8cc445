use super::*;

/// Tests finding a passenger by identifier.
///
/// Expected: Ok(Some) for an existing passenger, Ok(None) otherwise
#[tokio::test]
async fn finds_passenger_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = factory::create_passenger(db).await?;

    let repo = PassengerRepository::new(db);

    let found = repo.find_by_id(&passenger.passenger_id).await?.unwrap();
    assert_eq!(found.email, passenger.email);
    assert!(repo.find_by_id("missing").await?.is_none());

    Ok(())
}

/// Tests finding a passenger by email.
///
/// Expected: Ok(Some) for a registered email, Ok(None) otherwise
#[tokio::test]
async fn finds_passenger_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = factory::passenger::PassengerFactory::new(db)
        .email("lookup@example.com")
        .build()
        .await?;

    let repo = PassengerRepository::new(db);

    let found = repo.find_by_email("lookup@example.com").await?.unwrap();
    assert_eq!(found.passenger_id, passenger.passenger_id);
    assert!(repo.find_by_email("other@example.com").await?.is_none());

    Ok(())
}
