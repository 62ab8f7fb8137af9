use chrono::{DateTime, Utc};

use crate::model::discussion::{CommentDto, DiscussionPostDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub discussion_post_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, user: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            discussion_post_id: entity.discussion_post_id,
            user_id: entity.user_id,
            user_name: user.map(|u| u.name).unwrap_or_default(),
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            discussion_post_id: self.discussion_post_id,
            user_id: self.user_id,
            user_name: self.user_name,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

/// A top-level message on a prediction's discussion board with its replies.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscussionPost {
    pub id: i32,
    pub prediction_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl DiscussionPost {
    pub fn from_entity(
        entity: entity::discussion_post::Model,
        user: Option<entity::user::Model>,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            id: entity.id,
            prediction_id: entity.prediction_id,
            user_id: entity.user_id,
            user_name: user.map(|u| u.name).unwrap_or_default(),
            body: entity.body,
            created_at: entity.created_at,
            comments,
        }
    }

    pub fn into_dto(self) -> DiscussionPostDto {
        DiscussionPostDto {
            id: self.id,
            prediction_id: self.prediction_id,
            user_id: self.user_id,
            user_name: self.user_name,
            body: self.body,
            created_at: self.created_at,
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}
