//! Template domain models.
//!
//! A template fixes the dimensions of a post so predictions built from it line up with
//! each other. Each format keeps its templates in its own table; `TemplateShape` unifies
//! them for the service layer.

use chrono::{DateTime, Utc};

use crate::model::{
    post::PostFormat,
    template::{CreateTemplateDto, TemplateDto, TemplateShapeDto},
};

/// Dimensions of a template, per format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateShape {
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

impl TemplateShape {
    pub fn format(&self) -> PostFormat {
        match self {
            Self::Ranking { .. } => PostFormat::Ranking,
            Self::Bracket { .. } => PostFormat::Bracket,
            Self::Bingo { .. } => PostFormat::Bingo,
        }
    }

    pub fn from_dto(dto: TemplateShapeDto) -> Self {
        match dto {
            TemplateShapeDto::Ranking {
                number_of_rows,
                number_of_columns,
            } => Self::Ranking {
                number_of_rows,
                number_of_columns,
            },
            TemplateShapeDto::Bracket { number_of_rounds } => Self::Bracket { number_of_rounds },
            TemplateShapeDto::Bingo { grid_size } => Self::Bingo { grid_size },
        }
    }

    pub fn into_dto(self) -> TemplateShapeDto {
        match self {
            Self::Ranking {
                number_of_rows,
                number_of_columns,
            } => TemplateShapeDto::Ranking {
                number_of_rows,
                number_of_columns,
            },
            Self::Bracket { number_of_rounds } => TemplateShapeDto::Bracket { number_of_rounds },
            Self::Bingo { grid_size } => TemplateShapeDto::Bingo { grid_size },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    /// Official templates are visible to every user.
    pub is_official: bool,
    pub shape: TemplateShape,
    pub created_at: DateTime<Utc>,
}

impl Template {
    pub fn from_ranking(entity: entity::ranking_template::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            is_official: entity.is_official,
            shape: TemplateShape::Ranking {
                number_of_rows: entity.number_of_rows,
                number_of_columns: entity.number_of_columns,
            },
            created_at: entity.created_at,
        }
    }

    pub fn from_bracket(entity: entity::bracket_template::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            is_official: entity.is_official,
            shape: TemplateShape::Bracket {
                number_of_rounds: entity.number_of_rounds,
            },
            created_at: entity.created_at,
        }
    }

    pub fn from_bingo(entity: entity::bingo_template::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            is_official: entity.is_official,
            shape: TemplateShape::Bingo {
                grid_size: entity.grid_size,
            },
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TemplateDto {
        TemplateDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            is_official: self.is_official,
            shape: self.shape.into_dto(),
            created_at: self.created_at,
        }
    }

    /// Official templates are visible to everyone, others only to their owner.
    pub fn is_visible_to(&self, user_id: Option<i32>) -> bool {
        self.is_official || user_id == Some(self.user_id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateTemplateParams {
    pub name: String,
    pub shape: TemplateShape,
}

impl CreateTemplateParams {
    pub fn from_dto(dto: CreateTemplateDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            shape: TemplateShape::from_dto(dto.shape),
        }
    }
}
