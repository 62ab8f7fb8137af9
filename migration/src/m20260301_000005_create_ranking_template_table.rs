use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankingTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(RankingTemplate::Id))
                    .col(integer(RankingTemplate::UserId))
                    .col(string(RankingTemplate::Name))
                    .col(integer(RankingTemplate::NumberOfRows))
                    .col(integer(RankingTemplate::NumberOfColumns))
                    .col(boolean(RankingTemplate::IsOfficial).default(false))
                    .col(
                        timestamp_with_time_zone(RankingTemplate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranking_template_user_id")
                            .from(RankingTemplate::Table, RankingTemplate::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankingTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankingTemplate {
    Table,
    Id,
    UserId,
    Name,
    NumberOfRows,
    NumberOfColumns,
    IsOfficial,
    CreatedAt,
}
