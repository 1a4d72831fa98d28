use super::*;

/// Tests deleting a division that still has matches.
///
/// Expected: Err(BadRequest) with the existing matches message and the division kept
#[tokio::test]
async fn refuses_division_with_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;
    factory::create_match(db, division.id).await?;

    let service = DivisionService::new(db);
    let result = service.delete(division.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == DIVISION_HAS_MATCHES));
    assert_eq!(service.get(division.id).await?.id, division.id);

    Ok(())
}

/// Tests deleting a division without matches.
///
/// Expected: Ok and the division is gone
#[tokio::test]
async fn deletes_empty_division() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let division = factory::create_division(db).await?;

    let service = DivisionService::new(db);
    service.delete(division.id).await?;

    let result = service.get(division.id).await;
    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == DIVISION_NOT_FOUND));

    Ok(())
}
