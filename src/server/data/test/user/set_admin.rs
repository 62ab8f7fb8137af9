use super::*;

/// Tests granting admin and updating an unknown user.
///
/// Expected: Some(User) with admin set for an existing user, None otherwise
#[tokio::test]
async fn sets_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_admin(user.id, true).await?;
    assert!(updated.map(|u| u.admin).unwrap_or(false));

    let missing = repo.set_admin(user.id + 100, true).await?;
    assert!(missing.is_none());

    Ok(())
}
