use super::*;

/// Tests entering the score of a match.
///
/// Expected: Ok(Some) with both goals stored and other fields unchanged
#[tokio::test]
async fn updates_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;

    let repo = MatchRepository::new(db);
    let created = repo.create(param(division.id)).await?;

    let mut update = param(division.id);
    update.goals_home_team = Some(3);
    update.goals_away_team = Some(2);
    let updated = repo.update(created.id, update).await?.unwrap();

    assert_eq!(updated.goals_home_team, Some(3));
    assert_eq!(updated.goals_away_team, Some(2));
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.time, created.time);

    Ok(())
}

/// Tests updating a match that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;

    let repo = MatchRepository::new(db);
    assert!(repo.update(999, param(division.id)).await?.is_none());

    Ok(())
}
