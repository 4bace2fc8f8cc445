use super::*;

/// Tests finding an existing flight.
///
/// Expected: Ok(Some) with the stored inventory counters
#[tokio::test]
async fn finds_existing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::flight::FlightFactory::new(db)
        .total_seats(50)
        .available_seats(20)
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    let found = repo.find_by_id(&flight.flight_id).await?.unwrap();

    assert_eq!(found.flight_id, flight.flight_id);
    assert_eq!(found.total_seats, 50);
    assert_eq!(found.available_seats, 20);

    Ok(())
}

/// Tests finding a flight that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let found = repo.find_by_id("NOPE1").await?;

    assert!(found.is_none());

    Ok(())
}
