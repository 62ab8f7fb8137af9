use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000004_create_prediction_table::Prediction,
    m20260301_000005_create_ranking_template_table::RankingTemplate,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostRank::Table)
                    .if_not_exists()
                    .col(pk_auto(PostRank::Id))
                    .col(integer(PostRank::PredictionId))
                    .col(integer(PostRank::UserId))
                    .col(integer_null(PostRank::TemplateId))
                    .col(string(PostRank::Kind))
                    .col(integer_null(PostRank::Score))
                    .col(integer_null(PostRank::MaxScore))
                    .col(
                        timestamp_with_time_zone(PostRank::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_rank_prediction_id")
                            .from(PostRank::Table, PostRank::PredictionId)
                            .to(Prediction::Table, Prediction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_rank_user_id")
                            .from(PostRank::Table, PostRank::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_rank_template_id")
                            .from(PostRank::Table, PostRank::TemplateId)
                            .to(RankingTemplate::Table, RankingTemplate::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_rank_prediction_id_kind")
                    .table(PostRank::Table)
                    .col(PostRank::PredictionId)
                    .col(PostRank::Kind)
                    .to_owned(),
            )
            .await?;

        // One original per prediction and one counter per user.
        manager
            .create_index(
                Index::create()
                    .name("idx_post_rank_single_original")
                    .table(PostRank::Table)
                    .col(PostRank::PredictionId)
                    .unique()
                    .and_where(Expr::col(PostRank::Kind).eq("original"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_rank_single_counter")
                    .table(PostRank::Table)
                    .col(PostRank::PredictionId)
                    .col(PostRank::UserId)
                    .unique()
                    .and_where(Expr::col(PostRank::Kind).eq("counter"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostRank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostRank {
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
