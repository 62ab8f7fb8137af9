//! Discussion board repository: top-level posts on a prediction and their comments.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::discussion::{Comment, DiscussionPost};

pub struct DiscussionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscussionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_post(
        &self,
        prediction_id: i32,
        user_id: i32,
        body: String,
    ) -> Result<DiscussionPost, DbErr> {
        let entity = entity::discussion_post::ActiveModel {
            prediction_id: ActiveValue::Set(prediction_id),
            user_id: ActiveValue::Set(user_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(DiscussionPost::from_entity(entity, user, Vec::new()))
    }

    /// Finds a discussion post without its comments.
    pub async fn find_post(&self, id: i32) -> Result<Option<DiscussionPost>, DbErr> {
        let row = entity::prelude::DiscussionPost::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(post, user)| DiscussionPost::from_entity(post, user, Vec::new())))
    }

    /// Gets a prediction's discussion, oldest first, each post with its comments oldest first.
    pub async fn get_for_prediction(
        &self,
        prediction_id: i32,
    ) -> Result<Vec<DiscussionPost>, DbErr> {
        let posts = entity::prelude::DiscussionPost::find()
            .filter(entity::discussion_post::Column::PredictionId.eq(prediction_id))
            .order_by_asc(entity::discussion_post::Column::CreatedAt)
            .order_by_asc(entity::discussion_post::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let post_ids: Vec<i32> = posts.iter().map(|(p, _)| p.id).collect();

        let mut comments_by_post: HashMap<i32, Vec<Comment>> = HashMap::new();
        if !post_ids.is_empty() {
            let comments = entity::prelude::Comment::find()
                .filter(entity::comment::Column::DiscussionPostId.is_in(post_ids))
                .order_by_asc(entity::comment::Column::CreatedAt)
                .order_by_asc(entity::comment::Column::Id)
                .find_also_related(entity::prelude::User)
                .all(self.db)
                .await?;

            for (comment, user) in comments {
                comments_by_post
                    .entry(comment.discussion_post_id)
                    .or_default()
                    .push(Comment::from_entity(comment, user));
            }
        }

        Ok(posts
            .into_iter()
            .map(|(post, user)| {
                let comments = comments_by_post.remove(&post.id).unwrap_or_default();
                DiscussionPost::from_entity(post, user, comments)
            })
            .collect())
    }

    /// Deletes a discussion post and its comments.
    pub async fn delete_post(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscussionPost::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_comment(
        &self,
        discussion_post_id: i32,
        user_id: i32,
        body: String,
    ) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            discussion_post_id: ActiveValue::Set(discussion_post_id),
            user_id: ActiveValue::Set(user_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(Comment::from_entity(entity, user))
    }

    pub async fn find_comment(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let row = entity::prelude::Comment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(comment, user)| Comment::from_entity(comment, user)))
    }

    pub async fn delete_comment(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
