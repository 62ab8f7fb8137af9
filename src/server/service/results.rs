//! Publishing official results and the standings they produce.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::post::{PostFormat, PostKind},
    server::{
        data::{post::PostRepository, prediction::PredictionRepository},
        error::{auth::AuthError, AppError},
        model::{
            post::{NewPost, Submission},
            results::PredictionResults,
            user::User,
        },
        service::{
            post::{conform_to_original, ensure_format, validation::validate_submission, PostService},
            prediction::PredictionService,
            scoring::{score_post, standings},
        },
    },
};

pub struct ResultsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResultsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes the official result of one format and scores every post against it.
    ///
    /// An earlier result of the same format is replaced. Storing the result and
    /// rescoring all originals and counters happens in a single transaction.
    ///
    /// # Returns
    /// - `Ok(PredictionResults)` - The standings after scoring
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the owner nor an admin
    /// - `Err(AppError::BadRequest)` - Draft prediction, invalid body or no original post
    pub async fn publish(
        &self,
        prediction_id: i32,
        user: &User,
        format: PostFormat,
        submission: Submission,
    ) -> Result<PredictionResults, AppError> {
        ensure_format(format, &submission)?;

        let prediction = PredictionService::new(self.db)
            .find_visible(prediction_id, Some(user.id))
            .await?;

        if prediction.user_id != user.id && !user.admin {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "User attempted to publish results for prediction {} they do not own",
                    prediction_id
                ),
            )
            .into());
        }

        if prediction.is_draft {
            return Err(AppError::BadRequest(
                "Results cannot be published for a draft prediction".to_string(),
            ));
        }

        validate_submission(&submission, false)?;

        let original = PostRepository::new(self.db)
            .find_single(format, prediction_id, PostKind::Original)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "This prediction has no {} post to publish results for",
                    format.as_str()
                ))
            })?;

        let submission = conform_to_original(submission, &original)?;
        PostService::new(self.db)
            .check_references(user.id, &submission)
            .await?;

        let txn = self.db.begin().await?;
        let posts = PostRepository::new(&txn);

        posts
            .delete_by_kind(format, prediction_id, PostKind::Result)
            .await?;
        let result_id = posts
            .create(
                NewPost {
                    prediction_id,
                    user_id: user.id,
                    kind: PostKind::Result,
                },
                &submission,
            )
            .await?;
        let official = posts.find_by_id(format, result_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Result post {} not found after creation", result_id))
        })?;

        let scored = posts
            .find_all(
                format,
                prediction_id,
                &[PostKind::Original, PostKind::Counter],
            )
            .await?;
        for post in &scored {
            if let Some(score) = score_post(post, &official) {
                posts.save_score(format, post.header().id, &score).await?;
            }
        }

        PredictionRepository::new(&txn).touch(prediction_id).await?;
        txn.commit().await?;

        tracing::info!(
            "Published {} results for prediction {} and scored {} posts",
            format.as_str(),
            prediction_id,
            scored.len()
        );

        self.get(prediction_id, format, Some(user.id)).await
    }

    /// Gets the published results of one format with the ranked standings.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Prediction not visible or no result published
    pub async fn get(
        &self,
        prediction_id: i32,
        format: PostFormat,
        viewer_id: Option<i32>,
    ) -> Result<PredictionResults, AppError> {
        PredictionService::new(self.db)
            .find_visible(prediction_id, viewer_id)
            .await?;

        let posts = PostRepository::new(self.db);
        let result = posts
            .headers(format, prediction_id, &[PostKind::Result])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No {} results have been published for this prediction",
                    format.as_str()
                ))
            })?;

        let headers = posts
            .headers(
                format,
                prediction_id,
                &[PostKind::Original, PostKind::Counter],
            )
            .await?;

        Ok(PredictionResults {
            prediction_id,
            format,
            result,
            entries: standings(headers),
        })
    }
}
