use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("coach@club.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("coach@club.test").await?;

    assert_eq!(found.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests finding a user by an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@club.test").await?;

    assert!(found.is_none());

    Ok(())
}
