use super::*;

/// Tests updating a club while keeping its stamnumber.
///
/// Expected: Ok(Some) with the new fields
#[tokio::test]
async fn updates_club_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let repo = ClubRepository::new(db);
    let updated = repo
        .update(club.stamnumber, param(club.stamnumber))
        .await?
        .unwrap();

    assert_eq!(updated.stamnumber, club.stamnumber);
    assert_eq!(updated.name, "KFC Renamed");
    assert_eq!(updated.website.as_deref(), Some("https://kfc.test"));

    Ok(())
}

/// Tests renumbering a club that has teams.
///
/// Verifies that the club is stored under the new stamnumber and that its
/// teams follow it.
///
/// Expected: Ok(Some) and every team references the new stamnumber
#[tokio::test]
async fn moves_teams_to_new_stamnumber() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, home, away) = factory::helpers::create_club_with_teams(db).await?;
    let new_stamnumber = club.stamnumber + 100_000;

    let repo = ClubRepository::new(db);
    let updated = repo.update(club.stamnumber, param(new_stamnumber)).await?;

    assert_eq!(updated.map(|c| c.stamnumber), Some(new_stamnumber));
    assert!(repo.find_by_stamnumber(club.stamnumber).await?.is_none());

    let teams = TeamRepository::new(db)
        .get_by_stamnumber(new_stamnumber)
        .await?;
    let ids: Vec<i32> = teams.iter().map(|team| team.id).collect();
    assert_eq!(ids, vec![home.id, away.id]);

    Ok(())
}

/// Tests updating a club that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    assert!(repo.update(424242, param(424242)).await?.is_none());

    Ok(())
}
