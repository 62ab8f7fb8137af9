use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, post::PostRepository, prediction::PredictionRepository},
    error::{auth::AuthError, AppError},
    model::{
        prediction::{
            PaginatedPredictions, Prediction, PredictionDetail, PredictionFilter,
            UpsertPredictionParams,
        },
        user::User,
    },
    util::{
        pagination::{offset, per_page, total_pages},
        text::require_text,
    },
};

pub const MAX_TITLE_LENGTH: usize = 200;

pub struct PredictionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PredictionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a prediction the viewer is allowed to see.
    ///
    /// Drafts are only visible to their owner; to everyone else they do not exist.
    ///
    /// # Returns
    /// - `Ok(Prediction)` - Prediction visible to `viewer_id`
    /// - `Err(AppError::NotFound)` - Missing, or a draft owned by someone else
    pub async fn find_visible(
        &self,
        id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Prediction, AppError> {
        PredictionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|p| p.is_visible_to(viewer_id))
            .ok_or_else(|| AppError::NotFound("Prediction not found".to_string()))
    }

    /// Gets a page of published predictions, newest first.
    pub async fn get_paginated(
        &self,
        filter: PredictionFilter,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedPredictions, AppError> {
        let per_page = per_page(entries);

        offset(page, per_page)?;

        let (predictions, total) = PredictionRepository::new(self.db)
            .get_published_paginated(filter, page, per_page)
            .await?;

        Ok(PaginatedPredictions {
            predictions,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets a prediction with the summaries of every post on it.
    pub async fn get_detail(
        &self,
        id: i32,
        viewer_id: Option<i32>,
    ) -> Result<PredictionDetail, AppError> {
        let prediction = self.find_visible(id, viewer_id).await?;
        let posts = PostRepository::new(self.db).summaries(id).await?;

        Ok(PredictionDetail { prediction, posts })
    }

    /// Validates prediction details: title required, category must exist.
    pub async fn validate_params(
        &self,
        params: UpsertPredictionParams,
    ) -> Result<UpsertPredictionParams, AppError> {
        let title = require_text("Title", &params.title, MAX_TITLE_LENGTH)?;
        let description = params
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if let Some(category_id) = params.category_id {
            if CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Category {} does not exist",
                    category_id
                )));
            }
        }

        Ok(UpsertPredictionParams {
            title,
            description,
            category_id: params.category_id,
        })
    }

    /// Updates the details of a prediction owned by `user`.
    pub async fn update(
        &self,
        id: i32,
        user: &User,
        params: UpsertPredictionParams,
    ) -> Result<Prediction, AppError> {
        let prediction = self.find_visible(id, Some(user.id)).await?;
        if prediction.user_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to edit prediction {} they do not own", id),
            )
            .into());
        }

        let params = self.validate_params(params).await?;

        PredictionRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Prediction not found".to_string()))
    }

    /// Deletes a prediction. Allowed for its owner and for admins.
    pub async fn delete(&self, id: i32, user: &User) -> Result<(), AppError> {
        let prediction = self.find_visible(id, Some(user.id)).await?;
        if prediction.user_id != user.id && !user.admin {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to delete prediction {} they do not own", id),
            )
            .into());
        }

        PredictionRepository::new(self.db).delete(id).await?;

        tracing::info!("Prediction {} deleted by user {}", id, user.id);

        Ok(())
    }
}
