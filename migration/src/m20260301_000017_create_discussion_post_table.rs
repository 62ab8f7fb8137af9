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
                    .table(DiscussionPost::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscussionPost::Id))
                    .col(integer(DiscussionPost::PredictionId))
                    .col(integer(DiscussionPost::UserId))
                    .col(text(DiscussionPost::Body))
                    .col(
                        timestamp_with_time_zone(DiscussionPost::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discussion_post_prediction_id")
                            .from(DiscussionPost::Table, DiscussionPost::PredictionId)
                            .to(Prediction::Table, Prediction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discussion_post_user_id")
                            .from(DiscussionPost::Table, DiscussionPost::UserId)
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
            .drop_table(Table::drop().table(DiscussionPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscussionPost {
    Table,
    Id,
    PredictionId,
    UserId,
    Body,
    CreatedAt,
}
