use super::*;

/// Tests that categories are listed alphabetically.
///
/// Expected: names in ascending order
#[tokio::test]
async fn lists_categories_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Tennis", "Basketball", "Esports"] {
        factory::category::CategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let categories = CategoryRepository::new(db).get_all().await?;
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, vec!["Basketball", "Esports", "Tennis"]);

    Ok(())
}
