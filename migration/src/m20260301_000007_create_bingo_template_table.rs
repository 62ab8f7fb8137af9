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
                    .table(BingoTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(BingoTemplate::Id))
                    .col(integer(BingoTemplate::UserId))
                    .col(string(BingoTemplate::Name))
                    .col(integer(BingoTemplate::GridSize))
                    .col(boolean(BingoTemplate::IsOfficial).default(false))
                    .col(
                        timestamp_with_time_zone(BingoTemplate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bingo_template_user_id")
                            .from(BingoTemplate::Table, BingoTemplate::UserId)
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
            .drop_table(Table::drop().table(BingoTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BingoTemplate {
    Table,
    Id,
    UserId,
    Name,
    GridSize,
    IsOfficial,
    CreatedAt,
}
