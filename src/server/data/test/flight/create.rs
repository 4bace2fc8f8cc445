use super::*;

fn params(flight_id: &str) -> CreateFlightParams {
    let departure = Utc::now() + Duration::hours(12);
    CreateFlightParams {
        flight_id: flight_id.to_string(),
        departure_airport: "DEL".to_string(),
        arrival_airport: "BOM".to_string(),
        departure_time: departure,
        arrival_time: departure + Duration::hours(2),
        aircraft_type: "A320".to_string(),
        total_seats: 180,
    }
}

/// Tests creating a flight.
///
/// Verifies that a new flight starts with every seat available and status `scheduled`.
///
/// Expected: Ok with flight created
#[tokio::test]
async fn creates_flight_with_full_inventory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let flight = repo.create(params("AI101")).await?;

    assert_eq!(flight.flight_id, "AI101");
    assert_eq!(flight.total_seats, 180);
    assert_eq!(flight.available_seats, 180);
    assert_eq!(flight.status, "scheduled");

    let stored = entity::prelude::Flight::find_by_id("AI101".to_string())
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a flight whose identifier is already taken.
///
/// Verifies that the primary key constraint rejects the second insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_flight_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    repo.create(params("AI202")).await?;
    let result = repo.create(params("AI202")).await;

    assert!(result.is_err());

    Ok(())
}
