use super::*;

/// Tests deleting a match.
///
/// Expected: Ok(true) and the match can no longer be found
#[tokio::test]
async fn deletes_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    let created = factory::create_match(db, division.id).await?;

    let repo = MatchRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert!(!repo.delete(created.id).await?);

    Ok(())
}
