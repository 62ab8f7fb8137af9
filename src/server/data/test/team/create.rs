use super::*;

/// Tests creating a team and finding it by owner and name.
///
/// Expected: Ok with team found for its owner, not for another user
#[tokio::test]
async fn creates_team_scoped_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(
            owner.id,
            UpsertTeamParams {
                name: "Red Dragons".to_string(),
                photo_url: None,
            },
        )
        .await?;

    assert_eq!(team.user_id, owner.id);
    assert_eq!(
        repo.find_by_user_and_name(owner.id, "Red Dragons").await?,
        Some(team)
    );
    assert!(repo
        .find_by_user_and_name(other.id, "Red Dragons")
        .await?
        .is_none());

    Ok(())
}
