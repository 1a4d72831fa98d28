use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores every field and assigns an ID.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("secretary@club.test")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "secretary@club.test");
    assert_eq!(user.club.as_deref(), Some("1234"));
    assert!(!user.admin);

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Verifies that the unique constraint on email is enforced by the store.
///
/// Expected: Err with a constraint violation
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("taken@club.test")).await?;
    let result = repo.create(param("taken@club.test")).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().sql_err().is_some());

    Ok(())
}
