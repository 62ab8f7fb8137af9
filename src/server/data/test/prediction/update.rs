use super::*;

/// Tests that updating a prediction bumps last_modified.
///
/// Expected: new title and a later last_modified than created_at
#[tokio::test]
async fn updates_details_and_bumps_last_modified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let prediction = factory::prediction::PredictionFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let updated = PredictionRepository::new(db)
        .update(
            prediction.id,
            UpsertPredictionParams {
                title: "Renamed".to_string(),
                description: Some("Now with details".to_string()),
                category_id: None,
            },
        )
        .await?
        .expect("prediction exists");

    assert_eq!(updated.title, "Renamed");
    assert!(updated.last_modified > updated.created_at);

    Ok(())
}
