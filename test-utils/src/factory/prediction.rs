//! Prediction factory.
//!
//! Predictions are created published (`is_draft = false`) unless `draft(true)` is set.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PredictionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    category_id: Option<i32>,
    title: String,
    description: Option<String>,
    is_draft: bool,
    created_at: DateTime<Utc>,
}

impl<'a> PredictionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            category_id: None,
            title: format!("Prediction {}", next_id()),
            description: Some("Test prediction".to_string()),
            is_draft: false,
            created_at: Utc::now(),
        }
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn draft(mut self, is_draft: bool) -> Self {
        self.is_draft = is_draft;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::prediction::Model, DbErr> {
        entity::prediction::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            category_id: ActiveValue::Set(self.category_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            is_draft: ActiveValue::Set(self.is_draft),
            created_at: ActiveValue::Set(self.created_at),
            last_modified: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_prediction(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::prediction::Model, DbErr> {
    PredictionFactory::new(db, user_id).build().await
}

pub async fn create_draft_prediction(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::prediction::Model, DbErr> {
    PredictionFactory::new(db, user_id).draft(true).build().await
}
