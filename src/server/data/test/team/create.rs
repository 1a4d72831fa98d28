use super::*;

/// Tests creating a team for an existing club.
///
/// Expected: Ok with the stored team
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(TeamParam {
            stamnumber: club.stamnumber,
            suffix: Some("B".to_string()),
            color: "Red".to_string(),
        })
        .await?;

    assert!(team.id > 0);
    assert_eq!(team.stamnumber, club.stamnumber);
    assert_eq!(team.suffix.as_deref(), Some("B"));

    let all = repo.get_all().await?;
    assert_eq!(all, vec![team]);

    Ok(())
}
