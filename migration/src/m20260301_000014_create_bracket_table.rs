use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_team_table::Team,
    m20260301_000013_create_root_bracket_table::RootBracket,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bracket::Table)
                    .if_not_exists()
                    .col(pk_auto(Bracket::Id))
                    .col(integer(Bracket::RootBracketId))
                    .col(integer(Bracket::Round))
                    .col(integer(Bracket::Position))
                    .col(integer_null(Bracket::TeamId))
                    .col(boolean_null(Bracket::Correct))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bracket_root_bracket_id")
                            .from(Bracket::Table, Bracket::RootBracketId)
                            .to(RootBracket::Table, RootBracket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bracket_team_id")
                            .from(Bracket::Table, Bracket::TeamId)
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
            .drop_table(Table::drop().table(Bracket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bracket {
    Table,
    Id,
    RootBracketId,
    Round,
    Position,
    TeamId,
    Correct,
}
