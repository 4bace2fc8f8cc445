use super::*;

/// Tests creating a check-in record.
///
/// Expected: Ok with the record stored and the boarding group round-tripped
#[tokio::test]
async fn creates_checkin_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkin_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = CheckinRepository::new(db);
    let record = repo
        .create(CreateCheckinRecordParams {
            booking_id: booking.booking_id.clone(),
            boarding_pass_number: "FL1-abcdefgh-20250101120000".to_string(),
            gate_number: Some("A1".to_string()),
            boarding_group: BoardingGroup::B,
            checkin_time: Utc::now(),
        })
        .await?;

    assert_eq!(record.booking_id, booking.booking_id);
    assert_eq!(record.boarding_group, BoardingGroup::B);

    let found = repo.find_by_id(&record.checkin_id).await?.unwrap();
    assert_eq!(found.boarding_pass_number, "FL1-abcdefgh-20250101120000");

    Ok(())
}

/// Tests creating two records with the same boarding pass number.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_for_duplicate_boarding_pass_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkin_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = CheckinRepository::new(db);
    let params = CreateCheckinRecordParams {
        booking_id: booking.booking_id.clone(),
        boarding_pass_number: "SAME-NUMBER".to_string(),
        gate_number: None,
        boarding_group: BoardingGroup::A,
        checkin_time: Utc::now(),
    };
    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
