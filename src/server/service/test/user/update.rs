use super::*;

/// Tests updating a user while keeping their own email.
///
/// Expected: Ok with the new username
#[tokio::test]
async fn keeps_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("own@club.test")
        .build()
        .await?;

    let updated = UserService::new(db)
        .update(user.id, param("own@club.test"))
        .await?;

    assert_eq!(updated.username, "treasurer");

    Ok(())
}

/// Tests updating a user to an email that belongs to someone else.
///
/// Expected: Err(BadRequest) with the duplicate email message
#[tokio::test]
async fn rejects_email_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .email("other@club.test")
        .build()
        .await?;

    let result = UserService::new(db)
        .update(user.id, param("other@club.test"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == EMAIL_TAKEN));

    Ok(())
}
