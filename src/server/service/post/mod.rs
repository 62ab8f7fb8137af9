//! Post submission, retrieval and deletion.
//!
//! The prediction owner submits the `original` post of each format; every other user
//! may submit one `counter` per format until results are published. Counters must fit
//! the original's shape, see [`validation`].

pub mod validation;

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::post::{PostFormat, PostKind},
    server::{
        data::{
            post::PostRepository, prediction::PredictionRepository, team::TeamRepository,
            template::TemplateRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            post::{NewPost, Post, PostSummary, Submission},
            user::User,
        },
        service::{
            post::validation::{
                match_bracket, match_ranking, merge_bingo, submission_shape, validate_submission,
            },
            prediction::PredictionService,
        },
    },
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summaries of every post on a prediction visible to the viewer.
    pub async fn get_summaries(
        &self,
        prediction_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<PostSummary>, AppError> {
        PredictionService::new(self.db)
            .find_visible(prediction_id, viewer_id)
            .await?;

        Ok(PostRepository::new(self.db).summaries(prediction_id).await?)
    }

    /// Gets a full post. Posts on drafts are only visible to the draft's owner.
    pub async fn get(
        &self,
        format: PostFormat,
        id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Post, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(format, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        PredictionService::new(self.db)
            .find_visible(post.header().prediction_id, viewer_id)
            .await
            .map_err(|_| AppError::NotFound("Post not found".to_string()))?;

        Ok(post)
    }

    /// Submits a post on a prediction.
    ///
    /// The owner's post becomes the `original` of its format, anyone else's a `counter`.
    ///
    /// # Returns
    /// - `Ok(Post)` - The stored post
    /// - `Err(AppError::NotFound)` - Prediction missing or not visible
    /// - `Err(AppError::BadRequest)` - Invalid body, duplicate post, missing original or
    ///   results already published
    pub async fn submit(
        &self,
        prediction_id: i32,
        user: &User,
        format: PostFormat,
        submission: Submission,
    ) -> Result<Post, AppError> {
        ensure_format(format, &submission)?;

        let prediction = PredictionService::new(self.db)
            .find_visible(prediction_id, Some(user.id))
            .await?;

        let kind = if prediction.user_id == user.id {
            PostKind::Original
        } else {
            PostKind::Counter
        };

        validate_submission(&submission, kind == PostKind::Original)?;
        self.check_references(user.id, &submission).await?;

        // Uniqueness checks share the transaction of the insert.
        let txn = self.db.begin().await?;
        let posts = PostRepository::new(&txn);

        let submission = if kind == PostKind::Original {
            if posts
                .find_single(format, prediction_id, PostKind::Original)
                .await?
                .is_some()
            {
                return Err(AppError::BadRequest(format!(
                    "This prediction already has an original {} post",
                    format.as_str()
                )));
            }

            submission
        } else {
            let original = posts
                .find_single(format, prediction_id, PostKind::Original)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "This prediction has no {} post to counter",
                        format.as_str()
                    ))
                })?;

            if !posts
                .headers(format, prediction_id, &[PostKind::Result])
                .await?
                .is_empty()
            {
                return Err(AppError::BadRequest(
                    "Results have already been published for this prediction".to_string(),
                ));
            }

            if posts
                .find_header_by_user(format, prediction_id, user.id, PostKind::Counter)
                .await?
                .is_some()
            {
                return Err(AppError::BadRequest(format!(
                    "You have already countered this {} prediction",
                    format.as_str()
                )));
            }

            conform_to_original(submission, &original)?
        };

        let id = posts
            .create(
                NewPost {
                    prediction_id,
                    user_id: user.id,
                    kind,
                },
                &submission,
            )
            .await?;
        PredictionRepository::new(&txn).touch(prediction_id).await?;
        txn.commit().await?;

        tracing::debug!(
            "User {} submitted {} {} post {} on prediction {}",
            user.id,
            kind.as_str(),
            format.as_str(),
            id,
            prediction_id
        );

        PostRepository::new(self.db)
            .find_by_id(format, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Deletes a post. Allowed for its author and for admins.
    ///
    /// Deleting a result also clears every score it produced.
    pub async fn delete(&self, format: PostFormat, id: i32, user: &User) -> Result<(), AppError> {
        let header = PostRepository::new(self.db)
            .find_header(format, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if header.user_id != user.id && !user.admin {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to delete {} post {}", format.as_str(), id),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let posts = PostRepository::new(&txn);
        posts.delete(format, id).await?;
        if header.kind == PostKind::Result {
            posts.clear_scores(format, header.prediction_id).await?;
        }
        PredictionRepository::new(&txn)
            .touch(header.prediction_id)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    /// Checks that every referenced team exists and that the template, if any, is
    /// visible to `user_id` and has the submission's dimensions.
    pub async fn check_references(
        &self,
        user_id: i32,
        submission: &Submission,
    ) -> Result<(), AppError> {
        let team_ids: Vec<i32> = submission
            .team_ids()
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        if !team_ids.is_empty() {
            let existing = TeamRepository::new(self.db).existing_ids(&team_ids).await?;
            if let Some(missing) = team_ids.iter().find(|id| !existing.contains(*id)) {
                return Err(AppError::BadRequest(format!(
                    "Team {} does not exist",
                    missing
                )));
            }
        }

        if let Some(template_id) = submission.template_id() {
            let template = TemplateRepository::new(self.db)
                .find_by_id(submission.format(), template_id)
                .await?
                .filter(|t| t.is_visible_to(Some(user_id)))
                .ok_or_else(|| {
                    AppError::BadRequest(format!("Template {} does not exist", template_id))
                })?;

            if template.shape != submission_shape(submission) {
                return Err(AppError::BadRequest(format!(
                    "The post does not match the dimensions of template '{}'",
                    template.name
                )));
            }
        }

        Ok(())
    }
}

/// Rejects a body whose format differs from the route's.
pub fn ensure_format(format: PostFormat, submission: &Submission) -> Result<(), AppError> {
    if submission.format() != format {
        return Err(AppError::BadRequest(format!(
            "Expected a {} body but received a {} body",
            format.as_str(),
            submission.format().as_str()
        )));
    }

    Ok(())
}

/// Fits a counter or result to the original post of its format.
///
/// Rankings and brackets are checked against the original's shape; bingo cards take
/// the original's contents with the submitted `checked` flags.
pub fn conform_to_original(submission: Submission, original: &Post) -> Result<Submission, AppError> {
    match (submission, original) {
        (Submission::Ranking(s), Post::Ranking(o)) => {
            match_ranking(&s, o)?;
            Ok(Submission::Ranking(s))
        }
        (Submission::Bracket(s), Post::Bracket(o)) => {
            match_bracket(&s, o)?;
            Ok(Submission::Bracket(s))
        }
        (Submission::Bingo(s), Post::Bingo(o)) => Ok(Submission::Bingo(merge_bingo(&s, o)?)),
        (submission, original) => Err(AppError::BadRequest(format!(
            "A {} body cannot counter a {} post",
            submission.format().as_str(),
            original.format().as_str()
        ))),
    }
}
