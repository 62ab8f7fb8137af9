use super::*;

/// Tests that a template lands in the table of its shape's format.
///
/// Expected: template found as bracket, not as ranking
#[tokio::test]
async fn stores_template_by_format() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_prediction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = TemplateRepository::new(db);

    let template = repo
        .create(
            user.id,
            CreateTemplateParams {
                name: "Eight team knockout".to_string(),
                shape: TemplateShape::Bracket {
                    number_of_rounds: 3,
                },
            },
        )
        .await?;

    assert!(!template.is_official);
    assert_eq!(template.shape.format(), PostFormat::Bracket);

    let found = repo.find_by_id(PostFormat::Bracket, template.id).await?;
    assert_eq!(found.map(|t| t.shape), Some(TemplateShape::Bracket { number_of_rounds: 3 }));

    Ok(())
}
