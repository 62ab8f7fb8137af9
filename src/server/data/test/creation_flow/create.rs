use super::*;

/// Tests starting a flow and finding it by token.
///
/// Expected: in-progress flow without a prediction
#[tokio::test]
async fn creates_in_progress_flow() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expires_at = Utc::now() + Duration::hours(1);

    let repo = CreationFlowRepository::new(db);
    let flow = repo
        .create(user.id, "abcDEF123".to_string(), expires_at)
        .await?;

    assert_eq!(flow.status, CreationFlowStatus::InProgress);
    assert_eq!(flow.prediction_id, None);

    let found = repo
        .find_by_token("abcDEF123")
        .await?
        .expect("flow exists");
    assert_eq!(found.id, flow.id);
    assert_eq!(found.user_id, user.id);
    assert!(repo.find_by_token("unknown").await?.is_none());

    Ok(())
}

/// Tests linking a prediction and completing the flow.
///
/// Expected: prediction id and completed status stored
#[tokio::test]
async fn links_prediction_and_sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let draft = factory::prediction::create_draft_prediction(db, user.id).await?;
    let flow = factory::create_creation_flow(db, user.id).await?;

    let repo = CreationFlowRepository::new(db);
    repo.set_prediction(flow.id, draft.id).await?;
    repo.set_status(flow.id, CreationFlowStatus::Completed).await?;

    let stored = repo
        .find_by_token(&flow.token)
        .await?
        .expect("flow exists");
    assert_eq!(stored.prediction_id, Some(draft.id));
    assert_eq!(stored.status, CreationFlowStatus::Completed);

    Ok(())
}
