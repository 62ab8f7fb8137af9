use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000004_create_prediction_table::Prediction,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CreationFlow::Table)
                    .if_not_exists()
                    .col(pk_auto(CreationFlow::Id))
                    .col(string_uniq(CreationFlow::Token))
                    .col(integer(CreationFlow::UserId))
                    .col(integer_null(CreationFlow::PredictionId))
                    .col(string(CreationFlow::Status))
                    .col(
                        timestamp_with_time_zone(CreationFlow::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone(CreationFlow::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creation_flow_user_id")
                            .from(CreationFlow::Table, CreationFlow::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creation_flow_prediction_id")
                            .from(CreationFlow::Table, CreationFlow::PredictionId)
                            .to(Prediction::Table, Prediction::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_creation_flow_status_expires_at")
                    .table(CreationFlow::Table)
                    .col(CreationFlow::Status)
                    .col(CreationFlow::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CreationFlow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CreationFlow {
    Table,
    Id,
    Token,
    UserId,
    PredictionId,
    Status,
    CreatedAt,
    ExpiresAt,
}
