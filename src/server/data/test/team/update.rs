use super::*;

/// Tests moving a team to another club and clearing its suffix.
///
/// Expected: Ok(Some) with the new club and no suffix
#[tokio::test]
async fn updates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_club, _home, away) = factory::helpers::create_club_with_teams(db).await?;
    let other_club = factory::create_club(db).await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(
            away.id,
            TeamParam {
                stamnumber: other_club.stamnumber,
                suffix: None,
                color: "Green".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.stamnumber, other_club.stamnumber);
    assert!(updated.suffix.is_none());
    assert_eq!(updated.color, "Green");

    Ok(())
}
