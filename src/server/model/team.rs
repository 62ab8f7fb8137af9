use chrono::{DateTime, Utc};

use crate::model::team::{TeamDto, UpsertTeamDto};

/// A named competitor that users place into rankings and brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    /// Owner of the team.
    pub user_id: i32,
    pub name: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            photo_url: self.photo_url,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            photo_url: entity.photo_url,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertTeamParams {
    pub name: String,
    pub photo_url: Option<String>,
}

impl UpsertTeamParams {
    pub fn from_dto(dto: UpsertTeamDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            photo_url: dto.photo_url.filter(|url| !url.trim().is_empty()),
        }
    }
}
