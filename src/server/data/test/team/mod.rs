use crate::server::{data::team::TeamRepository, model::team::UpsertTeamParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod existing_ids;
mod get_by_user;
