use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000009_create_rank_table_table::RankTable;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankRow::Table)
                    .if_not_exists()
                    .col(pk_auto(RankRow::Id))
                    .col(integer(RankRow::RankTableId))
                    .col(integer(RankRow::RowIndex))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rank_row_rank_table_id")
                            .from(RankRow::Table, RankRow::RankTableId)
                            .to(RankTable::Table, RankTable::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankRow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankRow {
    Table,
    Id,
    RankTableId,
    RowIndex,
}
