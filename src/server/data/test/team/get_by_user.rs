use super::*;

/// Tests listing only the user's own teams, alphabetically.
///
/// Expected: two teams of the owner in name order
#[tokio::test]
async fn lists_own_teams_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::team::TeamFactory::new(db, owner.id).name("Wolves").build().await?;
    factory::team::TeamFactory::new(db, owner.id).name("Bears").build().await?;
    factory::team::TeamFactory::new(db, other.id).name("Hawks").build().await?;

    let teams = TeamRepository::new(db).get_by_user(owner.id).await?;
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, vec!["Bears", "Wolves"]);

    Ok(())
}
