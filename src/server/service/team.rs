use sea_orm::DatabaseConnection;

use crate::server::{
    data::team::TeamRepository,
    error::AppError,
    model::team::{Team, UpsertTeamParams},
    util::text::require_text,
};

pub const MAX_NAME_LENGTH: usize = 64;

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's own teams ordered by name.
    pub async fn get_own(&self, user_id: i32) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    pub async fn create(&self, user_id: i32, params: UpsertTeamParams) -> Result<Team, AppError> {
        let params = self.validate(user_id, None, params).await?;

        Ok(TeamRepository::new(self.db).create(user_id, params).await?)
    }

    /// Updates one of the user's teams. Other users' teams are reported as missing.
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        params: UpsertTeamParams,
    ) -> Result<Team, AppError> {
        self.find_owned(id, user_id).await?;
        let params = self.validate(user_id, Some(id), params).await?;

        TeamRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Deletes one of the user's teams. Rankings and brackets keep an empty cell.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.find_owned(id, user_id).await?;
        TeamRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn find_owned(&self, id: i32, user_id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|team| team.user_id == user_id)
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Team names are unique per owner.
    async fn validate(
        &self,
        user_id: i32,
        id: Option<i32>,
        params: UpsertTeamParams,
    ) -> Result<UpsertTeamParams, AppError> {
        let name = require_text("Name", &params.name, MAX_NAME_LENGTH)?;

        if let Some(existing) = TeamRepository::new(self.db)
            .find_by_user_and_name(user_id, &name)
            .await?
        {
            if Some(existing.id) != id {
                return Err(AppError::BadRequest(format!(
                    "You already have a team named '{}'",
                    name
                )));
            }
        }

        Ok(UpsertTeamParams {
            name,
            photo_url: params.photo_url,
        })
    }
}
