use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000015_create_post_bingo_table::PostBingo;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BingoCell::Table)
                    .if_not_exists()
                    .col(pk_auto(BingoCell::Id))
                    .col(integer(BingoCell::PostBingoId))
                    .col(integer(BingoCell::RowIndex))
                    .col(integer(BingoCell::ColumnIndex))
                    .col(string(BingoCell::Content))
                    .col(boolean(BingoCell::Checked).default(false))
                    .col(boolean_null(BingoCell::Correct))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bingo_cell_post_bingo_id")
                            .from(BingoCell::Table, BingoCell::PostBingoId)
                            .to(PostBingo::Table, PostBingo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BingoCell::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BingoCell {
    Table,
    Id,
    PostBingoId,
    RowIndex,
    ColumnIndex,
    Content,
    Checked,
    Correct,
}
