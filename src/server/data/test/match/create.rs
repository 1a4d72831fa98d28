use super::*;

/// Tests creating an unplayed match.
///
/// Verifies that every field is stored and that the goals stay empty.
///
/// Expected: Ok with the stored match
#[tokio::test]
async fn creates_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;

    let repo = MatchRepository::new(db);
    let created = repo.create(param(division.id)).await?;

    assert!(created.id > 0);
    assert_eq!(created.division_id, division.id);
    assert_eq!(created.matchweek, 4);
    assert_eq!(created.home_team_id, 11);
    assert!(created.goals_home_team.is_none());
    assert!(created.goals_away_team.is_none());

    let stored = repo.find_by_id(created.id).await?;
    assert_eq!(stored, Some(created));

    Ok(())
}

/// Tests creating a match with a referee and a status.
///
/// Expected: Ok with both references stored
#[tokio::test]
async fn creates_match_with_referee_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    let referee = factory::create_referee(db).await?;
    let status = factory::create_status(db).await?;

    let repo = MatchRepository::new(db);
    let mut create = param(division.id);
    create.referee_id = Some(referee.id);
    create.status_id = Some(status.id);
    let created = repo.create(create).await?;

    assert_eq!(created.referee_id, Some(referee.id));
    assert_eq!(created.status_id, Some(status.id));

    Ok(())
}
