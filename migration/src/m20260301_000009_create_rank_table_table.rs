use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000008_create_post_rank_table::PostRank;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankTable::Table)
                    .if_not_exists()
                    .col(pk_auto(RankTable::Id))
                    .col(integer(RankTable::PostRankId))
                    .col(integer(RankTable::NumberOfRows))
                    .col(integer(RankTable::NumberOfColumns))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rank_table_post_rank_id")
                            .from(RankTable::Table, RankTable::PostRankId)
                            .to(PostRank::Table, PostRank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankTable {
    Table,
    Id,
    PostRankId,
    NumberOfRows,
    NumberOfColumns,
}
