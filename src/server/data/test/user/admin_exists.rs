use super::*;

/// Tests admin detection on an empty and a populated user table.
///
/// Expected: false with only regular users, true once an admin exists
#[tokio::test]
async fn detects_admin_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::user::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::user::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
