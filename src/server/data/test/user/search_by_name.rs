use super::*;

/// Tests case-insensitive substring search over names.
///
/// Expected: only the matching user is returned
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Margaret").build().await?;
    factory::user::UserFactory::new(db).name("Tom").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.search_by_name("GARE", 20).await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Margaret");

    Ok(())
}
