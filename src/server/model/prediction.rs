//! Prediction domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::prediction::{
        PaginatedPredictionsDto, PredictionDetailDto, PredictionDto, UpsertPredictionDto,
    },
    server::model::post::PostSummary,
};

/// A prediction with its author and category names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// Drafts are only visible to their owner.
    pub is_draft: bool,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl Prediction {
    /// Builds the domain model from the prediction row and its joined author and category.
    pub fn from_entity(
        entity: entity::prediction::Model,
        user: Option<entity::user::Model>,
        category: Option<entity::category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            user_name: user.map(|u| u.name).unwrap_or_default(),
            category_id: entity.category_id,
            category_name: category.map(|c| c.name),
            title: entity.title,
            description: entity.description,
            is_draft: entity.is_draft,
            created_at: entity.created_at,
            last_modified: entity.last_modified,
        }
    }

    pub fn into_dto(self) -> PredictionDto {
        PredictionDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            category_id: self.category_id,
            category_name: self.category_name,
            title: self.title,
            description: self.description,
            is_draft: self.is_draft,
            created_at: self.created_at,
            last_modified: self.last_modified,
        }
    }

    /// Whether `user_id` may see this prediction.
    pub fn is_visible_to(&self, user_id: Option<i32>) -> bool {
        !self.is_draft || user_id == Some(self.user_id)
    }
}

/// A prediction together with the summaries of its posts.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionDetail {
    pub prediction: Prediction,
    pub posts: Vec<PostSummary>,
}

impl PredictionDetail {
    pub fn into_dto(self) -> PredictionDetailDto {
        PredictionDetailDto {
            prediction: self.prediction.into_dto(),
            posts: self.posts.into_iter().map(PostSummary::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPredictions {
    pub predictions: Vec<Prediction>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPredictions {
    pub fn into_dto(self) -> PaginatedPredictionsDto {
        PaginatedPredictionsDto {
            predictions: self
                .predictions
                .into_iter()
                .map(Prediction::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating or updating a prediction's details.
#[derive(Debug, Clone)]
pub struct UpsertPredictionParams {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}

impl UpsertPredictionParams {
    pub fn from_dto(dto: UpsertPredictionDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            category_id: dto.category_id,
        }
    }
}

/// Filter for listing published predictions.
#[derive(Debug, Clone, Default)]
pub struct PredictionFilter {
    pub category_id: Option<i32>,
    pub user_id: Option<i32>,
}
