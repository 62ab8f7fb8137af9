use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::post::PostFormat;

/// Structural definition of a template, tagged by format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum TemplateShapeDto {
    Ranking {
        number_of_rows: i32,
        number_of_columns: i32,
    },
    Bracket {
        number_of_rounds: i32,
    },
    Bingo {
        grid_size: i32,
    },
}

impl TemplateShapeDto {
    pub fn format(&self) -> PostFormat {
        match self {
            Self::Ranking { .. } => PostFormat::Ranking,
            Self::Bracket { .. } => PostFormat::Bracket,
            Self::Bingo { .. } => PostFormat::Bingo,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TemplateDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub is_official: bool,
    pub shape: TemplateShapeDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateTemplateDto {
    pub name: String,
    pub shape: TemplateShapeDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SetOfficialDto {
    pub official: bool,
}
