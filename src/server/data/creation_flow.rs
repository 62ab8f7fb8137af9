use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::{model::creation_flow::CreationFlowStatus, server::model::creation_flow::CreationFlow};

pub struct CreationFlowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CreationFlowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Starts a new in-progress flow for `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<CreationFlow, DbErr> {
        let entity = entity::creation_flow::ActiveModel {
            token: ActiveValue::Set(token),
            user_id: ActiveValue::Set(user_id),
            prediction_id: ActiveValue::Set(None),
            status: ActiveValue::Set(CreationFlowStatus::InProgress.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        CreationFlow::from_entity(entity)
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<CreationFlow>, DbErr> {
        let entity = entity::prelude::CreationFlow::find()
            .filter(entity::creation_flow::Column::Token.eq(token))
            .one(self.db)
            .await?;

        entity.map(CreationFlow::from_entity).transpose()
    }

    /// Links the flow to its draft prediction.
    pub async fn set_prediction(&self, id: i32, prediction_id: i32) -> Result<(), DbErr> {
        entity::prelude::CreationFlow::update_many()
            .col_expr(
                entity::creation_flow::Column::PredictionId,
                Expr::value(prediction_id),
            )
            .filter(entity::creation_flow::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_status(&self, id: i32, status: CreationFlowStatus) -> Result<(), DbErr> {
        entity::prelude::CreationFlow::update_many()
            .col_expr(
                entity::creation_flow::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(entity::creation_flow::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks every in-progress flow that expired before `now` as abandoned.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of flows abandoned
    pub async fn abandon_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::CreationFlow::update_many()
            .col_expr(
                entity::creation_flow::Column::Status,
                Expr::value(CreationFlowStatus::Abandoned.as_str()),
            )
            .filter(
                entity::creation_flow::Column::Status.eq(CreationFlowStatus::InProgress.as_str()),
            )
            .filter(entity::creation_flow::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
