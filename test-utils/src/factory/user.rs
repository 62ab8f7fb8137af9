//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db).name("Admin").admin(true).build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    google_id: String,
    name: String,
    email: String,
    admin: bool,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            google_id: format!("google-{}", id),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            admin: false,
        }
    }

    pub fn google_id(mut self, google_id: impl Into<String>) -> Self {
        self.google_id = google_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            google_id: ActiveValue::Set(self.google_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            admin: ActiveValue::Set(self.admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
