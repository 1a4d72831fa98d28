use super::*;

/// Tests entering a score on a match that keeps its referee.
///
/// Verifies that the match's own booking does not count as a conflict.
///
/// Expected: Ok with the score stored
#[tokio::test]
async fn updates_score_keeping_referee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    let referee = factory::create_referee(db).await?;

    let service = MatchService::new(db);
    let created = service
        .create(param(division.id, Some(referee.id)))
        .await?;

    let mut update = param(division.id, Some(referee.id));
    update.goals_home_team = Some(2);
    update.goals_away_team = Some(2);
    let updated = service.update(created.id, update).await?;

    assert_eq!(updated.goals_home_team, Some(2));
    assert_eq!(updated.referee_id, Some(referee.id));

    Ok(())
}

/// Tests assigning a referee who already referees another match in the same slot.
///
/// Expected: Err(BadRequest) with "Referee double booked" and the match unchanged
#[tokio::test]
async fn rejects_assigning_booked_referee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    let referee = factory::create_referee(db).await?;

    let service = MatchService::new(db);
    service
        .create(param(division.id, Some(referee.id)))
        .await?;
    let other = service.create(param(division.id, None)).await?;

    let result = service
        .update(other.id, param(division.id, Some(referee.id)))
        .await;

    assert_double_booked(result);
    assert!(service.get(other.id).await?.referee_id.is_none());

    Ok(())
}

/// Tests updating a match that does not exist.
///
/// Expected: Err(NotFound) with "Match does not exist"
#[tokio::test]
async fn fails_for_unknown_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;

    let result = MatchService::new(db)
        .update(999, param(division.id, None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == MATCH_NOT_FOUND));

    Ok(())
}
