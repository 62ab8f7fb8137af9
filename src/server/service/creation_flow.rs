//! Token-correlated wizard that assembles a draft prediction before publishing it.
//!
//! Steps: start the flow, set the prediction details (creates the draft), add one
//! original post per format, complete (publishes the draft). Every step after the
//! first requires the flow to be `in_progress`, unexpired and owned by the caller.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{creation_flow::CreationFlowStatus, post::PostKind},
    server::{
        data::{
            creation_flow::CreationFlowRepository, post::PostRepository,
            prediction::PredictionRepository,
        },
        error::AppError,
        model::{
            creation_flow::CreationFlow,
            post::{NewPost, Post, Submission},
            prediction::{Prediction, UpsertPredictionParams},
            user::User,
        },
        service::{
            post::{validation::validate_submission, PostService},
            prediction::PredictionService,
        },
    },
};

/// Length of the token shared by the steps of one flow.
pub const TOKEN_LENGTH: usize = 32;

/// How long a flow stays open after it is started.
pub const FLOW_LIFETIME_MINUTES: i64 = 60;

pub struct CreationFlowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CreationFlowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a new flow for `user`, expiring in one hour.
    pub async fn start(&self, user: &User) -> Result<CreationFlow, AppError> {
        let expires_at = Utc::now() + Duration::minutes(FLOW_LIFETIME_MINUTES);

        let flow = CreationFlowRepository::new(self.db)
            .create(user.id, generate_token(), expires_at)
            .await?;

        tracing::debug!("User {} started creation flow {}", user.id, flow.id);

        Ok(flow)
    }

    /// Gets a flow owned by `user` in any status.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown token or a flow owned by another user
    pub async fn get(&self, token: &str, user: &User) -> Result<CreationFlow, AppError> {
        CreationFlowRepository::new(self.db)
            .find_by_token(token)
            .await?
            .filter(|flow| flow.user_id == user.id)
            .ok_or_else(|| AppError::NotFound("Creation flow not found".to_string()))
    }

    /// Gets a flow that can still be advanced.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown token or another user's flow
    /// - `Err(AppError::BadRequest)` - Flow completed, abandoned or expired
    async fn get_active(&self, token: &str, user: &User) -> Result<CreationFlow, AppError> {
        let flow = self.get(token, user).await?;

        if flow.status != CreationFlowStatus::InProgress {
            return Err(AppError::BadRequest(format!(
                "This creation flow is {}",
                flow.status.as_str()
            )));
        }

        // The hourly sweep may not have run yet.
        if flow.is_expired(Utc::now()) {
            return Err(AppError::BadRequest(
                "This creation flow has expired".to_string(),
            ));
        }

        Ok(flow)
    }

    /// Creates the flow's draft prediction, or updates it when it already exists.
    pub async fn set_prediction(
        &self,
        token: &str,
        user: &User,
        params: UpsertPredictionParams,
    ) -> Result<Prediction, AppError> {
        let flow = self.get_active(token, user).await?;
        let params = PredictionService::new(self.db)
            .validate_params(params)
            .await?;

        if let Some(prediction_id) = flow.prediction_id {
            return PredictionRepository::new(self.db)
                .update(prediction_id, params)
                .await?
                .ok_or_else(|| AppError::NotFound("Prediction not found".to_string()));
        }

        let txn = self.db.begin().await?;
        let prediction = PredictionRepository::new(&txn)
            .create(user.id, params, true)
            .await?;
        CreationFlowRepository::new(&txn)
            .set_prediction(flow.id, prediction.id)
            .await?;
        txn.commit().await?;

        Ok(prediction)
    }

    /// Stores the original post of one format on the draft, replacing an earlier one.
    pub async fn add_post(
        &self,
        token: &str,
        user: &User,
        submission: Submission,
    ) -> Result<Post, AppError> {
        let flow = self.get_active(token, user).await?;
        let Some(prediction_id) = flow.prediction_id else {
            return Err(AppError::BadRequest(
                "Set the prediction details before adding posts".to_string(),
            ));
        };

        validate_submission(&submission, true)?;
        PostService::new(self.db)
            .check_references(user.id, &submission)
            .await?;

        let format = submission.format();

        let txn = self.db.begin().await?;
        let posts = PostRepository::new(&txn);
        posts
            .delete_by_kind(format, prediction_id, PostKind::Original)
            .await?;
        let post_id = posts
            .create(
                NewPost {
                    prediction_id,
                    user_id: user.id,
                    kind: PostKind::Original,
                },
                &submission,
            )
            .await?;
        let post = posts.find_by_id(format, post_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Post {} not found after creation", post_id))
        })?;
        PredictionRepository::new(&txn).touch(prediction_id).await?;
        txn.commit().await?;

        Ok(post)
    }

    /// Publishes the draft and marks the flow completed.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - No details set yet or no post added
    pub async fn complete(&self, token: &str, user: &User) -> Result<CreationFlow, AppError> {
        let flow = self.get_active(token, user).await?;
        let Some(prediction_id) = flow.prediction_id else {
            return Err(AppError::BadRequest(
                "Set the prediction details before completing".to_string(),
            ));
        };

        if PostRepository::new(self.db)
            .summaries(prediction_id)
            .await?
            .is_empty()
        {
            return Err(AppError::BadRequest(
                "Add at least one post before completing".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        PredictionRepository::new(&txn).publish(prediction_id).await?;
        CreationFlowRepository::new(&txn)
            .set_status(flow.id, CreationFlowStatus::Completed)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "User {} published prediction {} through creation flow {}",
            user.id,
            prediction_id,
            flow.id
        );

        self.get(token, user).await
    }

    /// Abandons every in-progress flow past its expiry. Run by the hourly sweep.
    pub async fn abandon_expired(&self) -> Result<u64, AppError> {
        Ok(CreationFlowRepository::new(self.db)
            .abandon_expired(Utc::now())
            .await?)
    }
}

/// Generates a random alphanumeric flow token.
pub fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                            abcdefghijklmnopqrstuvwxyz\
                            0123456789";
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_32_alphanumeric_characters() {
        let token = generate_token();

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn tokens_differ_between_calls() {
        assert_ne!(generate_token(), generate_token());
    }
}
