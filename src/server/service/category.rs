use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, UpsertCategoryParams},
    util::text::require_text,
};

pub const MAX_NAME_LENGTH: usize = 64;

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Creates a category with a unique, non-blank name.
    pub async fn create(&self, params: UpsertCategoryParams) -> Result<Category, AppError> {
        let params = self.validate(None, params).await?;

        Ok(CategoryRepository::new(self.db).create(params).await?)
    }

    /// Updates a category; the new name must not belong to another category.
    pub async fn update(
        &self,
        id: i32,
        params: UpsertCategoryParams,
    ) -> Result<Category, AppError> {
        let params = self.validate(Some(id), params).await?;

        CategoryRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Deletes a category. Predictions in it are kept without a category.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }

    async fn validate(
        &self,
        id: Option<i32>,
        params: UpsertCategoryParams,
    ) -> Result<UpsertCategoryParams, AppError> {
        let name = require_text("Name", &params.name, MAX_NAME_LENGTH)?;

        if let Some(existing) = CategoryRepository::new(self.db).find_by_name(&name).await? {
            if Some(existing.id) != id {
                return Err(AppError::BadRequest(format!(
                    "A category named '{}' already exists",
                    name
                )));
            }
        }

        Ok(UpsertCategoryParams {
            name,
            description: params
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }
}
