use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub discussion_post_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DiscussionPostDto {
    pub id: i32,
    pub prediction_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentDto>,
}

/// Request body shared by discussion posts and comments.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateMessageDto {
    pub body: String,
}
