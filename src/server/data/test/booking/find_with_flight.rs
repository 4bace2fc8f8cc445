use super::*;

/// Tests loading a booking together with its flight.
///
/// Expected: Ok(Some) with the booking's flight
#[tokio::test]
async fn loads_booking_and_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let (found_booking, found_flight) = repo.find_with_flight(&booking.booking_id).await?.unwrap();

    assert_eq!(found_booking.booking_id, booking.booking_id);
    assert_eq!(found_flight.flight_id, flight.flight_id);

    Ok(())
}

/// Tests loading an unknown booking with its flight.
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

    assert!(repo.find_with_flight("missing").await?.is_none());

    Ok(())
}
