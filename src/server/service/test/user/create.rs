use super::*;

/// Tests registering a user with an email already in use.
///
/// Expected: Err(BadRequest) with the duplicate email message
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@club.test")
        .build()
        .await?;

    let result = UserService::new(db).create(param("taken@club.test")).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == EMAIL_TAKEN));

    Ok(())
}
