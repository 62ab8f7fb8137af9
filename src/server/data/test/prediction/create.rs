use super::*;

/// Tests that a created prediction carries its author and category names.
///
/// Expected: Ok with user_name and category_name resolved
#[tokio::test]
async fn creates_prediction_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).name("Dana").build().await?;
    let category = factory::category::CategoryFactory::new(db)
        .name("Cycling")
        .build()
        .await?;

    let prediction = PredictionRepository::new(db)
        .create(
            user.id,
            UpsertPredictionParams {
                title: "Tour winner".to_string(),
                description: None,
                category_id: Some(category.id),
            },
            true,
        )
        .await?;

    assert!(prediction.is_draft);
    assert_eq!(prediction.user_name, "Dana");
    assert_eq!(prediction.category_name.as_deref(), Some("Cycling"));
    assert_eq!(prediction.created_at, prediction.last_modified);

    Ok(())
}
