use super::*;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that a logged-in user passes when no permission is required.
///
/// Expected: Ok(User) matching the stored user
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(resolved.id, user.id);
    assert!(!resolved.admin);

    Ok(())
}

/// Tests that a regular user cannot pass an admin check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests that an admin passes the admin check.
///
/// Expected: Ok(User) with admin flag set
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(resolved.admin);

    Ok(())
}
