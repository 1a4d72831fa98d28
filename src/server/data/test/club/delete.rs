use super::*;

/// Tests deleting a club with teams.
///
/// Verifies that the club's teams are deleted along with it while teams of
/// other clubs are kept.
///
/// Expected: Ok(true) and only the other club's team remains
#[tokio::test]
async fn deletes_club_and_its_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, _home, _away) = factory::helpers::create_club_with_teams(db).await?;
    let other_club = factory::create_club(db).await?;
    let other_team = factory::create_team(db, other_club.stamnumber).await?;

    let repo = ClubRepository::new(db);
    assert!(repo.delete(club.stamnumber).await?);
    assert!(repo.find_by_stamnumber(club.stamnumber).await?.is_none());

    let remaining = TeamRepository::new(db).get_all().await?;
    let ids: Vec<i32> = remaining.iter().map(|team| team.id).collect();
    assert_eq!(ids, vec![other_team.id]);

    Ok(())
}

/// Tests deleting a club that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    assert!(!repo.delete(424242).await?);

    Ok(())
}
