use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000004_create_prediction_table::Prediction,
    m20260301_000007_create_bingo_template_table::BingoTemplate,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostBingo::Table)
                    .if_not_exists()
                    .col(pk_auto(PostBingo::Id))
                    .col(integer(PostBingo::PredictionId))
                    .col(integer(PostBingo::UserId))
                    .col(integer_null(PostBingo::TemplateId))
                    .col(string(PostBingo::Kind))
                    .col(integer(PostBingo::GridSize))
                    .col(integer_null(PostBingo::Score))
                    .col(integer_null(PostBingo::MaxScore))
                    .col(
                        timestamp_with_time_zone(PostBingo::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_bingo_prediction_id")
                            .from(PostBingo::Table, PostBingo::PredictionId)
                            .to(Prediction::Table, Prediction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_bingo_user_id")
                            .from(PostBingo::Table, PostBingo::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_bingo_template_id")
                            .from(PostBingo::Table, PostBingo::TemplateId)
                            .to(BingoTemplate::Table, BingoTemplate::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_bingo_prediction_id_kind")
                    .table(PostBingo::Table)
                    .col(PostBingo::PredictionId)
                    .col(PostBingo::Kind)
                    .to_owned(),
            )
            .await?;

        // One original per prediction and one counter per user.
        manager
            .create_index(
                Index::create()
                    .name("idx_post_bingo_single_original")
                    .table(PostBingo::Table)
                    .col(PostBingo::PredictionId)
                    .unique()
                    .and_where(Expr::col(PostBingo::Kind).eq("original"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_bingo_single_counter")
                    .table(PostBingo::Table)
                    .col(PostBingo::PredictionId)
                    .col(PostBingo::UserId)
                    .unique()
                    .and_where(Expr::col(PostBingo::Kind).eq("counter"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostBingo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostBingo {
    Table,
    Id,
    PredictionId,
    UserId,
    TemplateId,
    Kind,
    GridSize,
    Score,
    MaxScore,
    CreatedAt,
}
