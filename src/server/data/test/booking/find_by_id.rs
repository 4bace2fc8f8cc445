use super::*;

/// Tests finding a booking by identifier.
///
/// Expected: Ok(Some) with parsed status
#[tokio::test]
async fn finds_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_by_id(&booking.booking_id).await?.unwrap();

    assert_eq!(found.booking_id, booking.booking_id);
    assert_eq!(found.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests finding a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo.find_by_id("missing").await?.is_none());

    Ok(())
}

/// Tests reading a booking whose stored status is not recognised.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let passenger = factory::create_passenger(db).await?;
    let booking =
        factory::booking::BookingFactory::new(db, &flight.flight_id, &passenger.passenger_id)
            .status("pending")
            .build()
            .await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_id(&booking.booking_id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
