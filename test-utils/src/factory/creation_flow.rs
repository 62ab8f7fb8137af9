//! Creation flow factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CreationFlowFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    prediction_id: Option<i32>,
    status: String,
    expires_at: DateTime<Utc>,
}

impl<'a> CreationFlowFactory<'a> {
    /// Defaults to an `in_progress` flow expiring one hour from now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("token{:027}", next_id()),
            prediction_id: None,
            status: "in_progress".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn prediction_id(mut self, prediction_id: Option<i32>) -> Self {
        self.prediction_id = prediction_id;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::creation_flow::Model, DbErr> {
        entity::creation_flow::ActiveModel {
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            prediction_id: ActiveValue::Set(self.prediction_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(self.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_creation_flow(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::creation_flow::Model, DbErr> {
    CreationFlowFactory::new(db, user_id).build().await
}
