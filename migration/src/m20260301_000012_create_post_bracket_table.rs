use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000004_create_prediction_table::Prediction,
    m20260301_000006_create_bracket_template_table::BracketTemplate,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostBracket::Table)
                    .if_not_exists()
                    .col(pk_auto(PostBracket::Id))
                    .col(integer(PostBracket::PredictionId))
                    .col(integer(PostBracket::UserId))
                    .col(integer_null(PostBracket::TemplateId))
                    .col(string(PostBracket::Kind))
                    .col(integer_null(PostBracket::Score))
                    .col(integer_null(PostBracket::MaxScore))
                    .col(
                        timestamp_with_time_zone(PostBracket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_bracket_prediction_id")
                            .from(PostBracket::Table, PostBracket::PredictionId)
                            .to(Prediction::Table, Prediction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_bracket_user_id")
                            .from(PostBracket::Table, PostBracket::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_bracket_template_id")
                            .from(PostBracket::Table, PostBracket::TemplateId)
                            .to(BracketTemplate::Table, BracketTemplate::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_bracket_prediction_id_kind")
                    .table(PostBracket::Table)
                    .col(PostBracket::PredictionId)
                    .col(PostBracket::Kind)
                    .to_owned(),
            )
            .await?;

        // One original per prediction and one counter per user.
        manager
            .create_index(
                Index::create()
                    .name("idx_post_bracket_single_original")
                    .table(PostBracket::Table)
                    .col(PostBracket::PredictionId)
                    .unique()
                    .and_where(Expr::col(PostBracket::Kind).eq("original"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_bracket_single_counter")
                    .table(PostBracket::Table)
                    .col(PostBracket::PredictionId)
                    .col(PostBracket::UserId)
                    .unique()
                    .and_where(Expr::col(PostBracket::Kind).eq("counter"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostBracket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostBracket {
    Table,
    Id,
    PredictionId,
    UserId,
    TemplateId,
    Kind,
    Score,
    MaxScore,
    CreatedAt,
}
