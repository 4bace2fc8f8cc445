use super::*;

async fn available_seats(db: &sea_orm::DatabaseConnection, flight_id: &str) -> Result<i32, DbErr> {
    Ok(entity::prelude::Flight::find_by_id(flight_id.to_string())
        .one(db)
        .await?
        .unwrap()
        .available_seats)
}

/// Tests decrementing a flight with seats left.
///
/// Expected: Ok(true) and one fewer seat available
#[tokio::test]
async fn decrements_when_seats_remain() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::flight::FlightFactory::new(db)
        .total_seats(10)
        .available_seats(3)
        .build()
        .await?;

    let repo = FlightRepository::new(db);

    assert!(repo.decrement_available_seats(&flight.flight_id).await?);
    assert_eq!(available_seats(db, &flight.flight_id).await?, 2);

    Ok(())
}

/// Tests decrementing a sold-out flight.
///
/// Verifies that the conditional update never takes the counter below zero.
///
/// Expected: Ok(false) and inventory unchanged
#[tokio::test]
async fn does_not_decrement_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::flight::FlightFactory::new(db)
        .total_seats(10)
        .available_seats(0)
        .build()
        .await?;

    let repo = FlightRepository::new(db);

    assert!(!repo.decrement_available_seats(&flight.flight_id).await?);
    assert_eq!(available_seats(db, &flight.flight_id).await?, 0);

    Ok(())
}

/// Tests adjusting inventory of a flight that does not exist.
///
/// Expected: Ok(false) for both directions
#[tokio::test]
async fn reports_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);

    assert!(!repo.decrement_available_seats("GHOST").await?);
    assert!(!repo.increment_available_seats("GHOST").await?);

    Ok(())
}

/// Tests incrementing a flight's inventory.
///
/// Expected: Ok(true) and one more seat available
#[tokio::test]
async fn increments_inventory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::flight::FlightFactory::new(db)
        .total_seats(100)
        .available_seats(50)
        .build()
        .await?;

    let repo = FlightRepository::new(db);

    assert!(repo.increment_available_seats(&flight.flight_id).await?);
    assert_eq!(available_seats(db, &flight.flight_id).await?, 51);

    Ok(())
}
