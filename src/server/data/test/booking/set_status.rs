use super::*;

/// Tests transitioning a confirmed booking.
///
/// Expected: Ok(true) and the new status stored
#[tokio::test]
async fn transitions_from_expected_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let changed = repo
        .set_status(
            &booking.booking_id,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        )
        .await?;

    assert!(changed);
    let stored = entity::prelude::Booking::find_by_id(booking.booking_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.booking_status, "cancelled");

    Ok(())
}

/// Tests transitioning a booking that is not in the expected status.
///
/// Verifies that a cancelled booking cannot be moved to checked_in by a caller that
/// expected it to still be confirmed.
///
/// Expected: Ok(false) and status unchanged
#[tokio::test]
async fn ignores_booking_in_other_status() -> Result<(), DbErr> {
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
            .status("cancelled")
            .build()
            .await?;

    let repo = BookingRepository::new(db);
    let changed = repo
        .set_status(
            &booking.booking_id,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
        )
        .await?;

    assert!(!changed);
    let stored = entity::prelude::Booking::find_by_id(booking.booking_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.booking_status, "cancelled");

    Ok(())
}
