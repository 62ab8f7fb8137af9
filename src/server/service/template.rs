use sea_orm::DatabaseConnection;

use crate::{
    model::post::PostFormat,
    server::{
        data::template::TemplateRepository,
        error::{auth::AuthError, AppError},
        model::{
            template::{CreateTemplateParams, Template},
            user::User,
        },
        service::post::validation::validate_shape,
        util::text::require_text,
    },
};

pub const MAX_NAME_LENGTH: usize = 64;

pub struct TemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets official templates of a format plus the viewer's own.
    pub async fn get_visible(
        &self,
        format: PostFormat,
        viewer_id: Option<i32>,
    ) -> Result<Vec<Template>, AppError> {
        Ok(TemplateRepository::new(self.db)
            .get_visible(format, viewer_id)
            .await?)
    }

    /// Gets a template the viewer may see; private templates of others are hidden.
    pub async fn get_by_id(
        &self,
        format: PostFormat,
        id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Template, AppError> {
        TemplateRepository::new(self.db)
            .find_by_id(format, id)
            .await?
            .filter(|t| t.is_visible_to(viewer_id))
            .ok_or_else(|| AppError::NotFound("Template not found".to_string()))
    }

    pub async fn create(
        &self,
        user_id: i32,
        params: CreateTemplateParams,
    ) -> Result<Template, AppError> {
        let name = require_text("Name", &params.name, MAX_NAME_LENGTH)?;
        validate_shape(params.shape)?;

        Ok(TemplateRepository::new(self.db)
            .create(
                user_id,
                CreateTemplateParams {
                    name,
                    shape: params.shape,
                },
            )
            .await?)
    }

    /// Deletes a template. Allowed for its owner and for admins.
    ///
    /// Admins reach every template; other users only those visible to them.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Missing, or another user's private template
    /// - `Err(AuthError::AccessDenied)` - An official template the caller does not own
    pub async fn delete(&self, format: PostFormat, id: i32, user: &User) -> Result<(), AppError> {
        let template = TemplateRepository::new(self.db)
            .find_by_id(format, id)
            .await?
            .filter(|t| user.admin || t.is_visible_to(Some(user.id)))
            .ok_or_else(|| AppError::NotFound("Template not found".to_string()))?;

        if template.user_id != user.id && !user.admin {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to delete {} template {}", format.as_str(), id),
            )
            .into());
        }

        TemplateRepository::new(self.db).delete(format, id).await?;

        Ok(())
    }

    /// Marks a template official (visible to everyone) or private again.
    pub async fn set_official(
        &self,
        format: PostFormat,
        id: i32,
        official: bool,
    ) -> Result<Template, AppError> {
        TemplateRepository::new(self.db)
            .set_official(format, id, official)
            .await?
            .ok_or_else(|| AppError::NotFound("Template not found".to_string()))
    }
}
