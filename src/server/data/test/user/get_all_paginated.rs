use super::*;

/// Tests paging through users ordered by name.
///
/// Expected: first page holds the two alphabetically first users, total counts all
#[tokio::test]
async fn pages_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    let (second_page, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = first_page.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Charlie");

    Ok(())
}
