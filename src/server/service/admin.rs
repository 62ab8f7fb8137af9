use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{PaginatedUsers, User},
    util::pagination::{offset, per_page, total_pages},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of users ordered by name.
    pub async fn get_users(&self, page: u64, entries: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = per_page(entries);

        offset(page, per_page)?;

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Grants or revokes admin. Admins cannot revoke their own flag.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `acting` tried to revoke their own admin flag
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_admin(&self, acting: &User, user_id: i32, admin: bool) -> Result<User, AppError> {
        if acting.id == user_id && !admin {
            return Err(AppError::BadRequest(
                "You cannot revoke your own admin permissions".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .set_admin(user_id, admin)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "User {} set admin of user {} to {}",
            acting.id,
            user.id,
            admin
        );

        Ok(user)
    }
}
