//! User domain models and parameters.
//!
//! Users are identified by their Google account id and carry an admin flag. Profiles
//! add aggregated statistics over the user's published predictions and scored posts.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, UserDto, UserProfileDto};

/// Application user authenticated through Google.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Google account subject identifier.
    pub google_id: String,
    /// Display name of the user.
    pub name: String,
    pub email: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            google_id: entity.google_id,
            name: entity.name,
            email: entity.email,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user during login.
///
/// `is_admin` of `None` preserves the stored admin flag of an existing user.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub google_id: String,
    pub name: String,
    pub email: String,
    pub is_admin: Option<bool>,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Public profile with prediction statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    /// Number of published predictions authored by the user.
    pub prediction_count: u64,
    /// Sum of scores over the user's scored original and counter posts.
    pub total_score: i64,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.user.id,
            name: self.user.name,
            admin: self.user.admin,
            created_at: self.user.created_at,
            prediction_count: self.prediction_count,
            total_score: self.total_score,
        }
    }
}
