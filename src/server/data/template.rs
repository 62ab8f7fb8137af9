//! Template data repository.
//!
//! Each format stores its templates in its own table. The repository dispatches on
//! `PostFormat` / `TemplateShape` so the service layer can treat them uniformly.

use chrono::Utc;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::post::PostFormat,
    server::model::template::{CreateTemplateParams, Template, TemplateShape},
};

pub struct TemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a non-official template in the table matching the shape's format.
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateTemplateParams,
    ) -> Result<Template, DbErr> {
        let now = Utc::now();

        let template = match params.shape {
            TemplateShape::Ranking {
                number_of_rows,
                number_of_columns,
            } => Template::from_ranking(
                entity::ranking_template::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    name: ActiveValue::Set(params.name),
                    number_of_rows: ActiveValue::Set(number_of_rows),
                    number_of_columns: ActiveValue::Set(number_of_columns),
                    is_official: ActiveValue::Set(false),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            TemplateShape::Bracket { number_of_rounds } => Template::from_bracket(
                entity::bracket_template::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    name: ActiveValue::Set(params.name),
                    number_of_rounds: ActiveValue::Set(number_of_rounds),
                    is_official: ActiveValue::Set(false),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            TemplateShape::Bingo { grid_size } => Template::from_bingo(
                entity::bingo_template::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    name: ActiveValue::Set(params.name),
                    grid_size: ActiveValue::Set(grid_size),
                    is_official: ActiveValue::Set(false),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
        };

        Ok(template)
    }

    pub async fn find_by_id(&self, format: PostFormat, id: i32) -> Result<Option<Template>, DbErr> {
        let template = match format {
            PostFormat::Ranking => entity::prelude::RankingTemplate::find_by_id(id)
                .one(self.db)
                .await?
                .map(Template::from_ranking),
            PostFormat::Bracket => entity::prelude::BracketTemplate::find_by_id(id)
                .one(self.db)
                .await?
                .map(Template::from_bracket),
            PostFormat::Bingo => entity::prelude::BingoTemplate::find_by_id(id)
                .one(self.db)
                .await?
                .map(Template::from_bingo),
        };

        Ok(template)
    }

    /// Gets the official templates of a format plus those owned by `user_id`, by name.
    pub async fn get_visible(
        &self,
        format: PostFormat,
        user_id: Option<i32>,
    ) -> Result<Vec<Template>, DbErr> {
        let templates = match format {
            PostFormat::Ranking => {
                use entity::ranking_template::Column;

                let mut condition = Condition::any().add(Column::IsOfficial.eq(true));
                if let Some(user_id) = user_id {
                    condition = condition.add(Column::UserId.eq(user_id));
                }

                entity::prelude::RankingTemplate::find()
                    .filter(condition)
                    .order_by_asc(Column::Name)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(Template::from_ranking)
                    .collect()
            }
            PostFormat::Bracket => {
                use entity::bracket_template::Column;

                let mut condition = Condition::any().add(Column::IsOfficial.eq(true));
                if let Some(user_id) = user_id {
                    condition = condition.add(Column::UserId.eq(user_id));
                }

                entity::prelude::BracketTemplate::find()
                    .filter(condition)
                    .order_by_asc(Column::Name)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(Template::from_bracket)
                    .collect()
            }
            PostFormat::Bingo => {
                use entity::bingo_template::Column;

                let mut condition = Condition::any().add(Column::IsOfficial.eq(true));
                if let Some(user_id) = user_id {
                    condition = condition.add(Column::UserId.eq(user_id));
                }

                entity::prelude::BingoTemplate::find()
                    .filter(condition)
                    .order_by_asc(Column::Name)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(Template::from_bingo)
                    .collect()
            }
        };

        Ok(templates)
    }

    /// Sets the official flag.
    ///
    /// # Returns
    /// - `Ok(Some(Template))` - The updated template
    /// - `Ok(None)` - No template of that format with that id
    pub async fn set_official(
        &self,
        format: PostFormat,
        id: i32,
        official: bool,
    ) -> Result<Option<Template>, DbErr> {
        let template = match format {
            PostFormat::Ranking => {
                let Some(model) = entity::prelude::RankingTemplate::find_by_id(id)
                    .one(self.db)
                    .await?
                else {
                    return Ok(None);
                };
                let mut active: entity::ranking_template::ActiveModel = model.into();
                active.is_official = ActiveValue::Set(official);
                Template::from_ranking(active.update(self.db).await?)
            }
            PostFormat::Bracket => {
                let Some(model) = entity::prelude::BracketTemplate::find_by_id(id)
                    .one(self.db)
                    .await?
                else {
                    return Ok(None);
                };
                let mut active: entity::bracket_template::ActiveModel = model.into();
                active.is_official = ActiveValue::Set(official);
                Template::from_bracket(active.update(self.db).await?)
            }
            PostFormat::Bingo => {
                let Some(model) = entity::prelude::BingoTemplate::find_by_id(id)
                    .one(self.db)
                    .await?
                else {
                    return Ok(None);
                };
                let mut active: entity::bingo_template::ActiveModel = model.into();
                active.is_official = ActiveValue::Set(official);
                Template::from_bingo(active.update(self.db).await?)
            }
        };

        Ok(Some(template))
    }

    /// Deletes a template. Posts built from it keep a null `template_id`.
    pub async fn delete(&self, format: PostFormat, id: i32) -> Result<bool, DbErr> {
        let rows_affected = match format {
            PostFormat::Ranking => {
                entity::prelude::RankingTemplate::delete_by_id(id)
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
            PostFormat::Bracket => {
                entity::prelude::BracketTemplate::delete_by_id(id)
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
            PostFormat::Bingo => {
                entity::prelude::BingoTemplate::delete_by_id(id)
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
        };

        Ok(rows_affected > 0)
    }
}
