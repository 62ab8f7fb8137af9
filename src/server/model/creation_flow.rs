use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::creation_flow::{CreationFlowDto, CreationFlowStatus},
    server::model::unknown_value,
};

/// A token-correlated wizard assembling one draft prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationFlow {
    pub id: i32,
    pub token: String,
    pub user_id: i32,
    /// Draft prediction, set once the details step has run.
    pub prediction_id: Option<i32>,
    pub status: CreationFlowStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CreationFlow {
    pub fn from_entity(entity: entity::creation_flow::Model) -> Result<Self, DbErr> {
        let status = CreationFlowStatus::parse(&entity.status)
            .ok_or_else(|| unknown_value("creation flow status", &entity.status))?;

        Ok(Self {
            id: entity.id,
            token: entity.token,
            user_id: entity.user_id,
            prediction_id: entity.prediction_id,
            status,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
        })
    }

    pub fn into_dto(self) -> CreationFlowDto {
        CreationFlowDto {
            token: self.token,
            status: self.status,
            prediction_id: self.prediction_id,
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
