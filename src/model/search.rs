use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{prediction::PredictionDto, team::TeamDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SearchResultsDto {
    pub predictions: Vec<PredictionDto>,
    pub users: Vec<UserDto>,
    pub teams: Vec<TeamDto>,
}
