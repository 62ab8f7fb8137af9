use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::category::{Category, UpsertCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: UpsertCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Finds a category by exact name. Used to reject duplicates before insert.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets all categories ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Updates name and description.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - The updated category
    /// - `Ok(None)` - No category with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpsertCategoryParams,
    ) -> Result<Option<Category>, DbErr> {
        let Some(category) = entity::prelude::Category::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = category.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        let updated = active.update(self.db).await?;

        Ok(Some(Category::from_entity(updated)))
    }

    /// Deletes a category. Predictions in it keep existing with a null category.
    ///
    /// # Returns
    /// - `Ok(true)` - The category was deleted
    /// - `Ok(false)` - No category with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
