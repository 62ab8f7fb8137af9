use super::*;

/// Tests that anonymous sessions resolve to no user instead of an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).optional().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a logged-in session resolves to its user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let stored = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(stored.id).await?;

    let user = AuthGuard::new(db, session).optional().await?;

    assert_eq!(user.map(|u| u.id), Some(stored.id));

    Ok(())
}
