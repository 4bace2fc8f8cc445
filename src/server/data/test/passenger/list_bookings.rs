use super::*;
use crate::server::model::booking::BookingStatus;

/// Tests listing a passenger's bookings.
///
/// Verifies that only the passenger's own bookings are returned, in every status.
///
/// Expected: Ok with the passenger's two bookings
#[tokio::test]
async fn lists_only_own_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let passenger = factory::create_passenger(db).await?;
    let other = factory::create_passenger(db).await?;

    factory::booking::BookingFactory::new(db, &flight.flight_id, &passenger.passenger_id)
        .seat_number("1A")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, &flight.flight_id, &passenger.passenger_id)
        .seat_number("2A")
        .status("cancelled")
        .build()
        .await?;
    factory::create_booking(db, &flight.flight_id, &other.passenger_id).await?;

    let repo = PassengerRepository::new(db);
    let bookings = repo.list_bookings(&passenger.passenger_id).await?;

    assert_eq!(bookings.len(), 2);
    assert!(bookings
        .iter()
        .all(|b| b.passenger_id == passenger.passenger_id));
    assert!(bookings.iter().any(|b| b.status == BookingStatus::Cancelled));

    Ok(())
}

/// Tests listing bookings for a passenger without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let passenger = factory::create_passenger(db).await?;

    let repo = PassengerRepository::new(db);

    assert!(repo.list_bookings(&passenger.passenger_id).await?.is_empty());

    Ok(())
}
