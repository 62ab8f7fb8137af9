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
                    .table(BracketTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(BracketTemplate::Id))
                    .col(integer(BracketTemplate::UserId))
                    .col(string(BracketTemplate::Name))
                    .col(integer(BracketTemplate::NumberOfRounds))
                    .col(boolean(BracketTemplate::IsOfficial).default(false))
                    .col(
                        timestamp_with_time_zone(BracketTemplate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bracket_template_user_id")
                            .from(BracketTemplate::Table, BracketTemplate::UserId)
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
            .drop_table(Table::drop().table(BracketTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BracketTemplate {
    Table,
    Id,
    UserId,
    Name,
    NumberOfRounds,
    IsOfficial,
    CreatedAt,
}
