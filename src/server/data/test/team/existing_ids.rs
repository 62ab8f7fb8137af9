use super::*;

/// Tests filtering a list of ids down to the teams that exist.
///
/// Expected: only the stored team id is returned
#[tokio::test]
async fn returns_only_stored_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let team = factory::create_team(db, owner.id).await?;

    let found = TeamRepository::new(db)
        .existing_ids(&[team.id, team.id + 50])
        .await?;

    assert_eq!(found.len(), 1);
    assert!(found.contains(&team.id));

    Ok(())
}
