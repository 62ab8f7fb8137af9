use super::*;
use crate::server::{
    error::AppError, model::category::UpsertCategoryParams, service::category::CategoryService,
};
use test_utils::builder::TestBuilder;

fn params(name: &str) -> UpsertCategoryParams {
    UpsertCategoryParams {
        name: name.to_string(),
        description: None,
    }
}

/// Tests that category names must be unique and non-blank.
///
/// Expected: 400 for a blank name and for a duplicate, renaming to its own name allowed
#[tokio::test]
async fn category_names_are_unique() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);

    let blank = service.create(params("   ")).await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let football = service.create(params(" Football ")).await?;
    assert_eq!(football.name, "Football");
    let tennis = service.create(params("Tennis")).await?;

    let duplicate = service.create(params("Football")).await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let taken = service.update(tennis.id, params("Football")).await;
    assert!(matches!(taken, Err(AppError::BadRequest(_))));

    let same = service.update(football.id, params("Football")).await?;
    assert_eq!(same.id, football.id);

    Ok(())
}

/// Tests deleting categories.
///
/// Expected: category gone, second delete 404
#[tokio::test]
async fn deletes_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let service = CategoryService::new(db);

    service.delete(category.id).await?;

    let missing = service.get_by_id(category.id).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
    let again = service.delete(category.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
