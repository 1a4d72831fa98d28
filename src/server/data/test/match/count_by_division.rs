use super::*;

/// Tests counting the matches of a division.
///
/// Expected: Ok with the number of matches in that division only
#[tokio::test]
async fn counts_matches_per_division() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    let empty_division = factory::create_division(db).await?;
    factory::create_match(db, division.id).await?;
    factory::create_match(db, division.id).await?;

    let repo = MatchRepository::new(db);
    assert_eq!(repo.count_by_division(division.id).await?, 2);
    assert_eq!(repo.count_by_division(empty_division.id).await?, 0);

    Ok(())
}
