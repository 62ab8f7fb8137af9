use super::*;

/// Tests visibility: official templates for everyone, private ones for their owner.
///
/// Expected: anonymous callers see 1 template, the owner sees 2, another user sees 1
#[tokio::test]
async fn returns_official_and_own_templates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::template::create_ranking_template(db, owner.id, 10, 1, true).await?;
    factory::template::create_ranking_template(db, owner.id, 5, 2, false).await?;
    factory::template::create_bingo_template(db, owner.id, 5, true).await?;

    let repo = TemplateRepository::new(db);

    assert_eq!(repo.get_visible(PostFormat::Ranking, None).await?.len(), 1);
    assert_eq!(
        repo.get_visible(PostFormat::Ranking, Some(owner.id))
            .await?
            .len(),
        2
    );
    assert_eq!(
        repo.get_visible(PostFormat::Ranking, Some(other.id))
            .await?
            .len(),
        1
    );

    Ok(())
}
