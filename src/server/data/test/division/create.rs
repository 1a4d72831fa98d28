use super::*;

/// Tests creating divisions and listing them.
///
/// Expected: Ok with divisions listed in creation order
#[tokio::test]
async fn creates_and_lists_divisions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DivisionRepository::new(db);
    let first = repo
        .create(DivisionParam {
            name: "Eerste Provinciale".to_string(),
        })
        .await?;
    let second = repo
        .create(DivisionParam {
            name: "Tweede Provinciale A".to_string(),
        })
        .await?;

    let all = repo.get_all().await?;
    assert_eq!(all, vec![first, second]);

    Ok(())
}
