use super::*;

/// Tests creating a category and finding it by id and name.
///
/// Expected: Ok with the stored category retrievable both ways
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(UpsertCategoryParams {
            name: "Football".to_string(),
            description: Some("Leagues and cups".to_string()),
        })
        .await?;

    assert_eq!(category.name, "Football");
    assert_eq!(repo.find_by_id(category.id).await?, Some(category.clone()));
    assert_eq!(repo.find_by_name("Football").await?, Some(category));

    Ok(())
}
