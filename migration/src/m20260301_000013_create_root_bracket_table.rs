use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000012_create_post_bracket_table::PostBracket;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RootBracket::Table)
                    .if_not_exists()
                    .col(pk_auto(RootBracket::Id))
                    .col(integer(RootBracket::PostBracketId))
                    .col(integer(RootBracket::NumberOfRounds))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_root_bracket_post_bracket_id")
                            .from(RootBracket::Table, RootBracket::PostBracketId)
                            .to(PostBracket::Table, PostBracket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RootBracket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RootBracket {
    Table,
    Id,
    PostBracketId,
    NumberOfRounds,
}
