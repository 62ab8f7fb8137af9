use super::*;

/// Tests publishing a draft and counting the author's published predictions.
///
/// Expected: count goes from 0 to 1
#[tokio::test]
async fn publishes_draft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let draft = factory::prediction::create_draft_prediction(db, user.id).await?;

    let repo = PredictionRepository::new(db);
    assert_eq!(repo.count_published_by_user(user.id).await?, 0);

    repo.publish(draft.id).await?;

    assert_eq!(repo.count_published_by_user(user.id).await?, 1);
    let stored = repo.find_by_id(draft.id).await?.expect("prediction exists");
    assert!(!stored.is_draft);

    Ok(())
}
