use chrono::{DateTime, Utc};

use crate::model::category::{CategoryDto, UpsertCategoryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating or updating a category.
#[derive(Debug, Clone)]
pub struct UpsertCategoryParams {
    pub name: String,
    pub description: Option<String>,
}

impl UpsertCategoryParams {
    pub fn from_dto(dto: UpsertCategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
        }
    }
}
