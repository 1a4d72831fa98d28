use super::*;

/// Tests replacing the fields of an existing user.
///
/// Expected: Ok(Some) with every field updated
#[tokio::test]
async fn updates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let mut update = param("renamed@club.test");
    update.admin = true;
    let updated = repo.update(created.id, update).await?.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "renamed@club.test");
    assert!(updated.admin);

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(999, param("ghost@club.test")).await?;

    assert!(result.is_none());

    Ok(())
}
