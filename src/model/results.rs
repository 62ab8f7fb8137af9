use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::post::{PostFormat, PostKind};

/// One scored post in the standings of a prediction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ScoredCounterPredictionDto {
    /// Competition rank; equal scores share a rank.
    pub rank: u32,
    pub post_id: i32,
    pub kind: PostKind,
    pub user_id: i32,
    pub user_name: String,
    pub score: i32,
    pub max_score: i32,
    pub created_at: DateTime<Utc>,
}

/// Official results for one format of a prediction and the resulting standings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PredictionResultsDto {
    pub prediction_id: i32,
    pub format: PostFormat,
    /// Id of the official post; fetch it through the matching `/api/posts/{format}/{id}` route.
    pub result_post_id: i32,
    pub published_at: DateTime<Utc>,
    pub entries: Vec<ScoredCounterPredictionDto>,
}
