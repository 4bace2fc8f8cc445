use super::*;

/// Tests creating a booking.
///
/// Verifies that the booking is confirmed, keeps the given seat and does not touch the
/// flight's inventory; adjusting inventory is the caller's job.
///
/// Expected: Ok with confirmed booking
#[tokio::test]
async fn creates_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let passenger = factory::create_passenger(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(NewBooking {
            flight_id: flight.flight_id.clone(),
            passenger_id: passenger.passenger_id.clone(),
            seat_number: "12A".to_string(),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.seat_number, "12A");
    assert_eq!(booking.flight_id, flight.flight_id);

    let stored_flight = entity::prelude::Flight::find_by_id(flight.flight_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_flight.available_seats, flight.available_seats);

    Ok(())
}

/// Tests creating a booking that references a missing flight.
///
/// Verifies that the foreign key on flight_id rejects the insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = factory::create_passenger(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(NewBooking {
            flight_id: "GHOST".to_string(),
            passenger_id: passenger.passenger_id,
            seat_number: "1A".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
