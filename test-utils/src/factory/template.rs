//! Template factories for the three prediction formats.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_ranking_template(
    db: &DatabaseConnection,
    user_id: i32,
    number_of_rows: i32,
    number_of_columns: i32,
    is_official: bool,
) -> Result<entity::ranking_template::Model, DbErr> {
    entity::ranking_template::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(format!("Ranking template {}", next_id())),
        number_of_rows: ActiveValue::Set(number_of_rows),
        number_of_columns: ActiveValue::Set(number_of_columns),
        is_official: ActiveValue::Set(is_official),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_bracket_template(
    db: &DatabaseConnection,
    user_id: i32,
    number_of_rounds: i32,
    is_official: bool,
) -> Result<entity::bracket_template::Model, DbErr> {
    entity::bracket_template::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(format!("Bracket template {}", next_id())),
        number_of_rounds: ActiveValue::Set(number_of_rounds),
        is_official: ActiveValue::Set(is_official),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_bingo_template(
    db: &DatabaseConnection,
    user_id: i32,
    grid_size: i32,
    is_official: bool,
) -> Result<entity::bingo_template::Model, DbErr> {
    entity::bingo_template::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(format!("Bingo template {}", next_id())),
        grid_size: ActiveValue::Set(grid_size),
        is_official: ActiveValue::Set(is_official),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
