use super::*;

fn param(google_id: &str, name: &str, is_admin: Option<bool>) -> UpsertUserParam {
    UpsertUserParam {
        google_id: google_id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        is_admin,
    }
}

/// Tests creating a new user.
///
/// Verifies that a first login inserts a user with the given Google id and name and
/// without admin privileges when no admin flag is passed.
///
/// Expected: Ok with user created and admin status set to false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("google-1", "Alice", None)).await?;

    assert_eq!(user.google_id, "google-1");
    assert_eq!(user.name, "Alice");
    assert!(!user.admin);

    Ok(())
}

/// Tests that a repeated login updates the name but keeps the admin flag.
///
/// Expected: Ok with the same id, new name and admin still true
#[tokio::test]
async fn updates_existing_user_and_preserves_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.upsert(param("google-2", "Bob", Some(true))).await?;
    let updated = repo.upsert(param("google-2", "Robert", None)).await?;

    assert_eq!(created.id, updated.id);
    assert_eq!(updated.name, "Robert");
    assert!(updated.admin);

    Ok(())
}
