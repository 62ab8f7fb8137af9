use super::*;
use crate::server::{error::AppError, model::team::UpsertTeamParams, service::team::TeamService};
use test_utils::builder::TestBuilder;

fn params(name: &str) -> UpsertTeamParams {
    UpsertTeamParams {
        name: name.to_string(),
        photo_url: None,
    }
}

/// Tests that team names are unique per user only.
///
/// Expected: 400 for the same user's duplicate, Ok for another user's
#[tokio::test]
async fn team_names_are_unique_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_user(db).await?;
    let second = create_user(db).await?;
    let service = TeamService::new(db);

    service.create(first.id, params("Lions")).await?;

    let duplicate = service.create(first.id, params("Lions")).await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let other = service.create(second.id, params("Lions")).await?;
    assert_eq!(other.user_id, second.id);

    Ok(())
}

/// Tests that only the owner may change a team.
///
/// Expected: 404 for another user, Ok for the owner
#[tokio::test]
async fn only_owner_changes_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    let team = factory::create_team(db, owner.id).await?;
    let service = TeamService::new(db);

    let update = service.update(team.id, other.id, params("Tigers")).await;
    assert!(matches!(update, Err(AppError::NotFound(_))));
    let delete = service.delete(team.id, other.id).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    let renamed = service.update(team.id, owner.id, params("Tigers")).await?;
    assert_eq!(renamed.name, "Tigers");

    service.delete(team.id, owner.id).await?;
    assert!(service.get_own(owner.id).await?.is_empty());

    Ok(())
}
