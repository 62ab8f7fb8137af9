use super::*;

/// Tests that deleting a category detaches its predictions instead of deleting them.
///
/// Expected: Ok(true), prediction still present with a null category
#[tokio::test]
async fn deletes_category_and_detaches_predictions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let prediction = factory::prediction::PredictionFactory::new(db, user.id)
        .category_id(Some(category.id))
        .build()
        .await?;

    let deleted = CategoryRepository::new(db).delete(category.id).await?;
    assert!(deleted);

    let stored = entity::prelude::Prediction::find_by_id(prediction.id)
        .one(db)
        .await?
        .expect("prediction should survive category deletion");
    assert_eq!(stored.category_id, None);

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CategoryRepository::new(db).delete(999).await?;
    assert!(!deleted);

    Ok(())
}
