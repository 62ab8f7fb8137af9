use super::*;

/// Tests that drafts are excluded and the newest prediction comes first.
///
/// Expected: 2 published predictions, newest first
#[tokio::test]
async fn lists_published_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    let older = factory::prediction::PredictionFactory::new(db, user.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::prediction::PredictionFactory::new(db, user.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    factory::prediction::create_draft_prediction(db, user.id).await?;

    let (predictions, total) = PredictionRepository::new(db)
        .get_published_paginated(PredictionFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = predictions.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests filtering by category and by author.
///
/// Expected: each filter returns only its matching prediction
#[tokio::test]
async fn filters_by_category_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let in_category = factory::prediction::PredictionFactory::new(db, alice.id)
        .category_id(Some(category.id))
        .build()
        .await?;
    let by_bob = factory::create_prediction(db, bob.id).await?;

    let repo = PredictionRepository::new(db);

    let (by_category, _) = repo
        .get_published_paginated(
            PredictionFilter {
                category_id: Some(category.id),
                user_id: None,
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, in_category.id);

    let (by_user, total) = repo
        .get_published_paginated(
            PredictionFilter {
                category_id: None,
                user_id: Some(bob.id),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(by_user[0].id, by_bob.id);

    Ok(())
}
