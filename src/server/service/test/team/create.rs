use super::*;

/// Tests creating a team for a club that does not exist.
///
/// Expected: Err(BadRequest) with the missing club message
#[tokio::test]
async fn rejects_unknown_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db)
        .create(TeamParam {
            stamnumber: 424242,
            suffix: None,
            color: "Yellow".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == CLUB_MISSING));

    Ok(())
}

/// Tests creating a team for an existing club.
///
/// Expected: Ok with the team linked to the club
#[tokio::test]
async fn creates_team_for_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;

    let team = TeamService::new(db)
        .create(TeamParam {
            stamnumber: club.stamnumber,
            suffix: Some("A".to_string()),
            color: "Yellow".to_string(),
        })
        .await?;

    assert_eq!(team.stamnumber, club.stamnumber);

    Ok(())
}
