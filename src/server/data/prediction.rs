//! Prediction data repository.
//!
//! Predictions are loaded together with their author (joined) and category (batched),
//! so every `Prediction` carries display names. Generic over `ConnectionTrait` so the
//! creation flow can create and publish inside a transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::prediction::{Prediction, PredictionFilter, UpsertPredictionParams};

pub struct PredictionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PredictionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a prediction owned by `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        params: UpsertPredictionParams,
        is_draft: bool,
    ) -> Result<Prediction, DbErr> {
        let now = Utc::now();

        let entity = entity::prediction::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            category_id: ActiveValue::Set(params.category_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            is_draft: ActiveValue::Set(is_draft),
            created_at: ActiveValue::Set(now),
            last_modified: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Prediction with id {} not found after creation",
            entity.id
        )))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Prediction>, DbErr> {
        let Some((prediction, user)) = entity::prelude::Prediction::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let category = match prediction.category_id {
            Some(category_id) => {
                entity::prelude::Category::find_by_id(category_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Some(Prediction::from_entity(prediction, user, category)))
    }

    /// Gets a page of published predictions, newest first.
    ///
    /// # Returns
    /// - `Ok((predictions, total))` - Predictions for the page and the total matching count
    pub async fn get_published_paginated(
        &self,
        filter: PredictionFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Prediction>, u64), DbErr> {
        let mut query = entity::prelude::Prediction::find()
            .filter(entity::prediction::Column::IsDraft.eq(false));

        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::prediction::Column::CategoryId.eq(category_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::prediction::Column::UserId.eq(user_id));
        }

        let paginator = query
            .order_by_desc(entity::prediction::Column::CreatedAt)
            .order_by_desc(entity::prediction::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let predictions = self.attach_categories(rows).await?;

        Ok((predictions, total))
    }

    /// Finds published predictions whose title contains `query`.
    pub async fn search_published(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<Prediction>, DbErr> {
        let rows = entity::prelude::Prediction::find()
            .filter(entity::prediction::Column::IsDraft.eq(false))
            .filter(entity::prediction::Column::Title.contains(query))
            .order_by_desc(entity::prediction::Column::CreatedAt)
            .limit(limit)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        self.attach_categories(rows).await
    }

    pub async fn count_published_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Prediction::find()
            .filter(entity::prediction::Column::UserId.eq(user_id))
            .filter(entity::prediction::Column::IsDraft.eq(false))
            .count(self.db)
            .await
    }

    /// Updates title, description and category and bumps `last_modified`.
    pub async fn update(
        &self,
        id: i32,
        params: UpsertPredictionParams,
    ) -> Result<Option<Prediction>, DbErr> {
        let Some(prediction) = entity::prelude::Prediction::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::prediction::ActiveModel = prediction.into();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.category_id = ActiveValue::Set(params.category_id);
        active.last_modified = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Clears the draft flag, making the prediction public.
    pub async fn publish(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Prediction::update_many()
            .col_expr(
                entity::prediction::Column::IsDraft,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::prediction::Column::LastModified,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::prediction::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Bumps `last_modified`. Called when posts or results change.
    pub async fn touch(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Prediction::update_many()
            .col_expr(
                entity::prediction::Column::LastModified,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::prediction::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a prediction together with its posts and discussion.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Prediction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves category names for a batch of predictions in one query.
    async fn attach_categories(
        &self,
        rows: Vec<(entity::prediction::Model, Option<entity::user::Model>)>,
    ) -> Result<Vec<Prediction>, DbErr> {
        let category_ids: Vec<i32> = rows.iter().filter_map(|(p, _)| p.category_id).collect();

        let categories: HashMap<i32, entity::category::Model> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|(prediction, user)| {
                let category = prediction
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                Prediction::from_entity(prediction, user, category)
            })
            .collect())
    }
}
