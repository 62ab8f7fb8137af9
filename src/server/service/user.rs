use sea_orm::DatabaseConnection;

use crate::server::{
    data::{leaderboard::LeaderboardRepository, prediction::PredictionRepository, user::UserRepository},
    error::AppError,
    model::user::{User, UserProfile},
    util::text::require_text,
};

pub const MAX_NAME_LENGTH: usize = 64;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's public profile with prediction count and total score.
    pub async fn get_profile(&self, id: i32) -> Result<UserProfile, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let prediction_count = PredictionRepository::new(self.db)
            .count_published_by_user(id)
            .await?;
        let total_score = LeaderboardRepository::new(self.db)
            .total_for_user(id)
            .await?;

        Ok(UserProfile {
            user,
            prediction_count,
            total_score,
        })
    }

    /// Renames a user. The name must be non-blank and at most 64 characters.
    pub async fn rename(&self, user_id: i32, name: &str) -> Result<User, AppError> {
        let name = require_text("Name", name, MAX_NAME_LENGTH)?;

        UserRepository::new(self.db)
            .update_name(user_id, name)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
