use super::*;

/// Tests creating a match for a referee who is free at that time.
///
/// Expected: Ok with the referee assigned
#[tokio::test]
async fn creates_match_for_free_referee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    let referee = factory::create_referee(db).await?;
    let (date, _) = kickoff();
    factory::r#match::MatchFactory::new(db, division.id)
        .kickoff(date, NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        .referee(Some(referee.id))
        .build()
        .await?;

    let created = MatchService::new(db)
        .create(param(division.id, Some(referee.id)))
        .await?;

    assert_eq!(created.referee_id, Some(referee.id));

    Ok(())
}

/// Tests creating a match for a referee already booked at the same date and time.
///
/// Verifies that the write is refused and nothing is stored.
///
/// Expected: Err(BadRequest) with "Referee double booked"
#[tokio::test]
async fn rejects_double_booked_referee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    let referee = factory::create_referee(db).await?;
    let (date, time) = kickoff();
    factory::r#match::MatchFactory::new(db, division.id)
        .kickoff(date, time)
        .referee(Some(referee.id))
        .build()
        .await?;

    let service = MatchService::new(db);
    let result = service.create(param(division.id, Some(referee.id))).await;

    assert_double_booked(result);
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests creating two matches without a referee in the same slot.
///
/// Expected: Ok for both
#[tokio::test]
async fn allows_unrefereed_matches_in_same_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;

    let service = MatchService::new(db);
    service.create(param(division.id, None)).await?;
    service.create(param(division.id, None)).await?;

    assert_eq!(service.get_all().await?.len(), 2);

    Ok(())
}
