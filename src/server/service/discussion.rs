use sea_orm::DatabaseConnection;

use crate::server::{
    data::discussion::DiscussionRepository,
    error::AppError,
    model::{
        discussion::{Comment, DiscussionPost},
        user::User,
    },
    service::prediction::PredictionService,
    util::text::require_text,
};

pub const MAX_BODY_LENGTH: usize = 2000;

pub struct DiscussionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a prediction's discussion, oldest first.
    pub async fn get_for_prediction(
        &self,
        prediction_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<DiscussionPost>, AppError> {
        PredictionService::new(self.db)
            .find_visible(prediction_id, viewer_id)
            .await?;

        Ok(DiscussionRepository::new(self.db)
            .get_for_prediction(prediction_id)
            .await?)
    }

    /// Starts a discussion thread on a published prediction.
    pub async fn create_post(
        &self,
        prediction_id: i32,
        user: &User,
        body: &str,
    ) -> Result<DiscussionPost, AppError> {
        let body = require_text("Message", body, MAX_BODY_LENGTH)?;

        let prediction = PredictionService::new(self.db)
            .find_visible(prediction_id, Some(user.id))
            .await?;
        if prediction.is_draft {
            return Err(AppError::NotFound("Prediction not found".to_string()));
        }

        Ok(DiscussionRepository::new(self.db)
            .create_post(prediction_id, user.id, body)
            .await?)
    }

    /// Deletes a thread with its comments. Only its author or an admin may.
    pub async fn delete_post(&self, id: i32, user: &User) -> Result<(), AppError> {
        let repo = DiscussionRepository::new(self.db);

        repo.find_post(id)
            .await?
            .filter(|post| post.user_id == user.id || user.admin)
            .ok_or_else(|| AppError::NotFound("Discussion post not found".to_string()))?;

        repo.delete_post(id).await?;

        Ok(())
    }

    pub async fn create_comment(
        &self,
        discussion_post_id: i32,
        user: &User,
        body: &str,
    ) -> Result<Comment, AppError> {
        let body = require_text("Comment", body, MAX_BODY_LENGTH)?;
        let repo = DiscussionRepository::new(self.db);

        if repo.find_post(discussion_post_id).await?.is_none() {
            return Err(AppError::NotFound(
                "Discussion post not found".to_string(),
            ));
        }

        Ok(repo
            .create_comment(discussion_post_id, user.id, body)
            .await?)
    }

    /// Deletes a comment. Only its author or an admin may.
    pub async fn delete_comment(&self, id: i32, user: &User) -> Result<(), AppError> {
        let repo = DiscussionRepository::new(self.db);

        repo.find_comment(id)
            .await?
            .filter(|comment| comment.user_id == user.id || user.admin)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        repo.delete_comment(id).await?;

        Ok(())
    }
}
