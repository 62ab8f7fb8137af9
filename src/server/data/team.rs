//! Team data repository.
//!
//! Teams are owned by a user and referenced by ranking cells and bracket slots. Team
//! names are unique per owner.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;

use crate::server::model::team::{Team, UpsertTeamParams};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, params: UpsertTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(params.name),
            photo_url: ActiveValue::Set(params.photo_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds the owner's team with exactly this name.
    pub async fn find_by_user_and_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::UserId.eq(user_id))
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets the user's teams ordered by name.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::UserId.eq(user_id))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Returns which of `ids` exist.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<HashSet<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i32> = entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Id)
            .filter(entity::team::Column::Id.is_in(ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(found.into_iter().collect())
    }

    pub async fn update(&self, id: i32, params: UpsertTeamParams) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = team.into();
        active.name = ActiveValue::Set(params.name);
        active.photo_url = ActiveValue::Set(params.photo_url);
        let updated = active.update(self.db).await?;

        Ok(Some(Team::from_entity(updated)))
    }

    /// Deletes a team. Cells and slots referencing it become empty.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn search_by_name(&self, query: &str, limit: u64) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.contains(query))
            .order_by_asc(entity::team::Column::Name)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }
}
