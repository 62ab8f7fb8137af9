use super::*;

/// Tests updating an existing and a missing category.
///
/// Expected: Some with new values for the existing one, None for the missing one
#[tokio::test]
async fn updates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let repo = CategoryRepository::new(db);

    let params = UpsertCategoryParams {
        name: "Motorsport".to_string(),
        description: None,
    };
    let updated = repo.update(category.id, params.clone()).await?;
    assert_eq!(updated.map(|c| c.name), Some("Motorsport".to_string()));

    let missing = repo.update(category.id + 100, params).await?;
    assert!(missing.is_none());

    Ok(())
}
