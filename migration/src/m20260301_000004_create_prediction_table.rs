use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prediction::Table)
                    .if_not_exists()
                    .col(pk_auto(Prediction::Id))
                    .col(integer(Prediction::UserId))
                    .col(integer_null(Prediction::CategoryId))
                    .col(string(Prediction::Title))
                    .col(text_null(Prediction::Description))
                    .col(boolean(Prediction::IsDraft).default(true))
                    .col(
                        timestamp_with_time_zone(Prediction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Prediction::LastModified)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prediction_user_id")
                            .from(Prediction::Table, Prediction::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prediction_category_id")
                            .from(Prediction::Table, Prediction::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prediction_created_at")
                    .table(Prediction::Table)
                    .col(Prediction::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prediction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prediction {
    Table,
    Id,
    UserId,
    CategoryId,
    Title,
    Description,
    IsDraft,
    CreatedAt,
    LastModified,
}
