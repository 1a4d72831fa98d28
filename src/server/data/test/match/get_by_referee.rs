use super::*;

/// Tests listing the matches assigned to a referee.
///
/// Verifies that matches of other referees and matches without a referee are
/// left out.
///
/// Expected: Ok with only the referee's bookings
#[tokio::test]
async fn returns_only_bookings_of_referee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (division, referee, booked) = factory::helpers::create_match_with_referee(db).await?;
    let other_referee = factory::create_referee(db).await?;
    factory::r#match::MatchFactory::new(db, division.id)
        .referee(Some(other_referee.id))
        .build()
        .await?;
    factory::create_match(db, division.id).await?;

    let repo = MatchRepository::new(db);
    let bookings = repo.get_by_referee(referee.id).await?;

    let ids: Vec<i32> = bookings.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![booked.id]);

    Ok(())
}

/// Tests listing the bookings of a referee without matches.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_free_referee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let referee = factory::create_referee(db).await?;

    let repo = MatchRepository::new(db);
    assert!(repo.get_by_referee(referee.id).await?.is_empty());

    Ok(())
}
