use super::*;

/// Tests that only expired in-progress flows are abandoned.
///
/// Verifies that a live flow and an expired but completed flow are left alone.
///
/// Expected: Ok(1), only the expired in-progress flow is abandoned
#[tokio::test]
async fn abandons_only_expired_in_progress_flows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let expired = factory::creation_flow::CreationFlowFactory::new(db, user.id)
        .expires_at(now - Duration::minutes(5))
        .build()
        .await?;
    let live = factory::creation_flow::CreationFlowFactory::new(db, user.id)
        .expires_at(now + Duration::minutes(30))
        .build()
        .await?;
    let completed = factory::creation_flow::CreationFlowFactory::new(db, user.id)
        .status("completed")
        .expires_at(now - Duration::minutes(5))
        .build()
        .await?;

    let repo = CreationFlowRepository::new(db);
    let abandoned = repo.abandon_expired(now).await?;

    assert_eq!(abandoned, 1);

    for (token, expected) in [
        (expired.token, CreationFlowStatus::Abandoned),
        (live.token, CreationFlowStatus::InProgress),
        (completed.token, CreationFlowStatus::Completed),
    ] {
        let flow = repo.find_by_token(&token).await?.expect("flow exists");
        assert_eq!(flow.status, expected);
    }

    Ok(())
}
