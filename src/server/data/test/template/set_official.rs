use super::*;

/// Tests promoting a template to official.
///
/// Expected: Some with is_official true; None for an id of another format's table
#[tokio::test]
async fn marks_template_official() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let template = factory::template::create_bingo_template(db, owner.id, 5, false).await?;

    let repo = TemplateRepository::new(db);
    let updated = repo
        .set_official(PostFormat::Bingo, template.id, true)
        .await?;
    assert_eq!(updated.map(|t| t.is_official), Some(true));

    let missing = repo
        .set_official(PostFormat::Bracket, template.id, true)
        .await?;
    assert!(missing.is_none());

    Ok(())
}
