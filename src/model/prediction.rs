use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::post::PostSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PredictionDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub is_draft: bool,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

/// A prediction together with summaries of all of its posts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PredictionDetailDto {
    pub prediction: PredictionDto,
    pub posts: Vec<PostSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedPredictionsDto {
    pub predictions: Vec<PredictionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for creating or updating a prediction's details.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpsertPredictionDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
}
