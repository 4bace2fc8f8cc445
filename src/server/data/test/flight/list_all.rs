use super::*;

/// Tests listing flights.
///
/// Verifies that flights come back ordered by departure time regardless of insert order.
///
/// Expected: Ok with flights sorted earliest first
#[tokio::test]
async fn lists_flights_by_departure_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let later = factory::flight::FlightFactory::new(db)
        .departure_time(now + Duration::hours(48))
        .build()
        .await?;
    let sooner = factory::flight::FlightFactory::new(db)
        .departure_time(now + Duration::hours(6))
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    let flights = repo.list_all().await?;

    let ids: Vec<_> = flights.iter().map(|f| f.flight_id.as_str()).collect();
    assert_eq!(ids, vec![sooner.flight_id.as_str(), later.flight_id.as_str()]);

    Ok(())
}

/// Tests listing flights on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);

    assert!(repo.list_all().await?.is_empty());

    Ok(())
}
