//! Team factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    photo_url: Option<String>,
}

impl<'a> TeamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Team {}", next_id()),
            photo_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn photo_url(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = photo_url;
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            photo_url: ActiveValue::Set(self.photo_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_team(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, user_id).build().await
}
