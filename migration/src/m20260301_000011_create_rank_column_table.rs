use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_team_table::Team,
    m20260301_000010_create_rank_row_table::RankRow,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankColumn::Table)
                    .if_not_exists()
                    .col(pk_auto(RankColumn::Id))
                    .col(integer(RankColumn::RankRowId))
                    .col(integer(RankColumn::ColumnIndex))
                    .col(integer_null(RankColumn::TeamId))
                    .col(boolean_null(RankColumn::Correct))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rank_column_rank_row_id")
                            .from(RankColumn::Table, RankColumn::RankRowId)
                            .to(RankRow::Table, RankRow::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rank_column_team_id")
                            .from(RankColumn::Table, RankColumn::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankColumn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankColumn {
    Table,
    Id,
    RankRowId,
    ColumnIndex,
    TeamId,
    Correct,
}
