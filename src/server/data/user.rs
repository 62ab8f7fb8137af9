//! User data repository for database operations.
//!
//! Handles user creation on login, lookups, admin management and name search, converting
//! entity models to `User` domain models at the boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{UpsertUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user by Google id.
    ///
    /// Inserts a new user or updates an existing user's name and email. The admin flag is
    /// only written when `param.is_admin` is `Some`, so a regular login never revokes it.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![entity::user::Column::Name, entity::user::Column::Email];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            google_id: ActiveValue::Set(param.google_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::GoogleId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist.
    ///
    /// Used on login: when no admin exists the logging-in user is promoted.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets a page of users ordered by name.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the page and the total user count
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok((users, total))
    }

    /// Sets a user's admin flag.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    pub async fn set_admin(&self, user_id: i32, admin: bool) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.admin = ActiveValue::Set(admin);
        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    pub async fn update_name(&self, user_id: i32, name: String) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.name = ActiveValue::Set(name);
        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Finds users whose name contains `query`, case-insensitively for ASCII.
    pub async fn search_by_name(&self, query: &str, limit: u64) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Name.contains(query))
            .order_by_asc(entity::user::Column::Name)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }
}
