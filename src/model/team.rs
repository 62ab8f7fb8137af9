use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating a team.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpsertTeamDto {
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}
