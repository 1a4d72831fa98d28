use super::*;

/// Tests deleting a division without matches.
///
/// Expected: Ok(true) and the division can no longer be found
#[tokio::test]
async fn deletes_empty_division() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;

    let repo = DivisionRepository::new(db);
    assert!(repo.delete(division.id).await?);
    assert!(repo.find_by_id(division.id).await?.is_none());

    Ok(())
}
