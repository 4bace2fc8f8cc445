use super::*;

/// Tests finding a check-in record by booking.
///
/// Expected: Ok(Some) for a checked-in booking, Ok(None) for one without a record
#[tokio::test]
async fn finds_record_by_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkin_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight, passenger, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::booking::BookingFactory::new(db, &flight.flight_id, &passenger.passenger_id)
        .seat_number("2A")
        .build()
        .await?;
    let record = factory::create_checkin_record(db, &booking.booking_id).await?;

    let repo = CheckinRepository::new(db);

    let found = repo.find_by_booking(&booking.booking_id).await?.unwrap();
    assert_eq!(found.checkin_id, record.checkin_id);
    assert!(repo.find_by_booking(&other.booking_id).await?.is_none());

    Ok(())
}

/// Tests loading a check-in record with its booking and flight.
///
/// Expected: Ok(Some) with all three linked rows
#[tokio::test]
async fn loads_record_with_booking_and_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkin_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let record = factory::checkin_record::CheckinRecordFactory::new(db, &booking.booking_id)
        .boarding_group("C")
        .build()
        .await?;

    let repo = CheckinRepository::new(db);
    let (found_record, found_booking, found_flight) = repo
        .find_with_booking_and_flight(&record.checkin_id)
        .await?
        .unwrap();

    assert_eq!(found_record.boarding_group, BoardingGroup::C);
    assert_eq!(found_booking.booking_id, booking.booking_id);
    assert_eq!(found_flight.flight_id, flight.flight_id);

    Ok(())
}

/// Tests loading an unknown check-in record.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_checkin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkin_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CheckinRepository::new(db);

    assert!(repo.find_by_id("missing").await?.is_none());
    assert!(repo
        .find_with_booking_and_flight("missing")
        .await?
        .is_none());

    Ok(())
}
